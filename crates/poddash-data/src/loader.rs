//! CSV loading for poddash.
//!
//! Reads the episode metrics table exported by the podcast host into
//! [`EpisodeRecord`] structs. This is a one-shot startup operation: a missing
//! file, a missing required column, or an unparseable timestamp aborts the
//! load, while a malformed download count degrades that single cell to `NaN`.

use std::path::Path;

use poddash_core::error::{DashboardError, Result};
use poddash_core::models::{EpisodeDataset, EpisodeRecord};
use poddash_core::timestamps::parse_timestamp;
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and parse the metrics CSV at `path` into an [`EpisodeDataset`].
///
/// The header may carry extra columns in any order; only the four required
/// ones are read. Fails when the file cannot be opened, a required column is
/// absent, a timestamp cell does not parse, or no data rows exist.
pub fn load_dataset(path: &Path) -> Result<EpisodeDataset> {
    let file = std::fs::File::open(path).map_err(|source| DashboardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let columns = locate_columns(&headers)?;

    let mut records: Vec<EpisodeRecord> = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        records.push(parse_record(&record, &columns, row_no)?);
    }

    if records.is_empty() {
        return Err(DashboardError::EmptyDataset(path.to_path_buf()));
    }

    debug!("Loaded {} records from {}", records.len(), path.display());

    Ok(EpisodeDataset::from_records(records))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Indices of the required columns within the CSV header.
struct ColumnIndices {
    episode_title: usize,
    published_at: usize,
    interval: usize,
    downloads_total: usize,
}

/// Resolve each required column name to its header position.
fn locate_columns(headers: &[String]) -> Result<ColumnIndices> {
    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DashboardError::MissingColumn(name.to_string()))
    };

    Ok(ColumnIndices {
        episode_title: find("episode_title")?,
        published_at: find("published_at")?,
        interval: find("interval")?,
        downloads_total: find("downloads_total")?,
    })
}

/// Parse one CSV row into an [`EpisodeRecord`].
fn parse_record(
    record: &csv::StringRecord,
    columns: &ColumnIndices,
    row_no: usize,
) -> Result<EpisodeRecord> {
    let episode_title = record
        .get(columns.episode_title)
        .unwrap_or("")
        .trim()
        .to_string();

    let published_raw = record.get(columns.published_at).unwrap_or("");
    let published_at = parse_timestamp(published_raw)
        .ok_or_else(|| DashboardError::TimestampParse(published_raw.to_string()))?;

    let interval_raw = record.get(columns.interval).unwrap_or("");
    let interval = parse_timestamp(interval_raw)
        .ok_or_else(|| DashboardError::TimestampParse(interval_raw.to_string()))?;

    // Malformed download counts degrade to NaN rather than failing the load;
    // they surface downstream as gaps in the rendered charts.
    let downloads_raw = record.get(columns.downloads_total).unwrap_or("");
    let downloads_total = match downloads_raw.trim().parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            warn!(
                "Row {}: downloads_total '{}' is not numeric; recording NaN",
                row_no, downloads_raw
            );
            f64::NAN
        }
    };

    Ok(EpisodeRecord {
        episode_title,
        published_at,
        interval,
        downloads_total,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
