//! Monthly and per-episode aggregation over the loaded metrics table.
//!
//! Both views are derived from the same immutable record slice: the monthly
//! overview is computed once at startup, the per-episode series on every
//! selection change.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use poddash_core::models::EpisodeRecord;
use poddash_core::timestamps::month_key;

// ── MonthlyRow ────────────────────────────────────────────────────────────────

/// One row of the merged monthly overview table.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    /// Calendar-month key, e.g. `"2023-02"`.
    pub month: String,
    /// Sum of every episode's cumulative download count at the month's last
    /// recorded interval.
    pub downloads_total: f64,
    /// Number of distinct episodes first published in this month.
    pub episode_count: u32,
}

// ── EpisodeSeries ─────────────────────────────────────────────────────────────

/// The download history of a single episode, ordered by interval.
#[derive(Debug, Clone)]
pub struct EpisodeSeries {
    /// The selected episode title.
    pub title: String,
    /// `(interval, cumulative downloads)` pairs sorted ascending by interval.
    pub points: Vec<(DateTime<Utc>, f64)>,
    /// Successive differences of the cumulative series. The first delta is
    /// the first cumulative value itself (no prior baseline).
    pub deltas: Vec<f64>,
    /// Publish timestamp, constant across the episode's rows. `None` when the
    /// title is not present in the dataset.
    pub published_at: Option<DateTime<Utc>>,
    /// Sum of the delta series; equals the final cumulative value.
    pub total_downloads: f64,
    /// Last delta, i.e. downloads accrued in the most recent period.
    pub latest_downloads: f64,
}

// ── Monthly overview ──────────────────────────────────────────────────────────

/// Build the merged monthly overview table.
///
/// Download totals are grouped by interval (summed across episodes), bucketed
/// by calendar month, and the month's figure is the *last* interval's total —
/// cumulative counts must not be summed across intervals. Episode counts come
/// from deduplicating records by title (first occurrence wins) and bucketing
/// by publish month. The two series are outer-joined on the month key with
/// zeros for missing metrics, sorted ascending.
///
/// Note: because each month reports cumulative totals, a long-running episode
/// contributes its full running total to every month it appears in. This
/// mirrors the original dashboard's computation and is intentional.
pub fn monthly_overview(records: &[EpisodeRecord]) -> Vec<MonthlyRow> {
    // Per-interval totals across all episodes. BTreeMap keeps intervals
    // ascending so the last insert per month below is the most recent one.
    let mut interval_totals: BTreeMap<DateTime<Utc>, f64> = BTreeMap::new();
    for rec in records {
        *interval_totals.entry(rec.interval).or_insert(0.0) += rec.downloads_total;
    }

    let mut monthly_downloads: BTreeMap<String, f64> = BTreeMap::new();
    for (interval, total) in &interval_totals {
        monthly_downloads.insert(month_key(*interval), *total);
    }

    // New episodes per publish month, one count per distinct title.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut monthly_episodes: BTreeMap<String, u32> = BTreeMap::new();
    for rec in records {
        if seen.insert(rec.episode_title.as_str()) {
            *monthly_episodes
                .entry(month_key(rec.published_at))
                .or_insert(0) += 1;
        }
    }

    // Outer join: every month present in either series appears exactly once.
    let mut months: BTreeSet<String> = monthly_downloads.keys().cloned().collect();
    months.extend(monthly_episodes.keys().cloned());

    months
        .into_iter()
        .map(|month| MonthlyRow {
            downloads_total: monthly_downloads.get(&month).copied().unwrap_or(0.0),
            episode_count: monthly_episodes.get(&month).copied().unwrap_or(0),
            month,
        })
        .collect()
}

// ── Per-episode series ────────────────────────────────────────────────────────

/// Build the download series for a single episode title.
///
/// A title absent from the dataset yields a well-defined empty series: no
/// points, zero totals, no publish date. The caller renders it as a
/// placeholder instead of failing the request.
pub fn episode_series(records: &[EpisodeRecord], title: &str) -> EpisodeSeries {
    let mut points: Vec<(DateTime<Utc>, f64)> = records
        .iter()
        .filter(|r| r.episode_title == title)
        .map(|r| (r.interval, r.downloads_total))
        .collect();
    points.sort_by_key(|(interval, _)| *interval);

    let published_at = records
        .iter()
        .find(|r| r.episode_title == title)
        .map(|r| r.published_at);

    // First delta is the cumulative value itself; the rest are successive
    // differences. The telescoping sum makes total == final cumulative.
    let mut deltas: Vec<f64> = Vec::with_capacity(points.len());
    let mut prev: Option<f64> = None;
    for &(_, cumulative) in &points {
        deltas.push(match prev {
            Some(p) => cumulative - p,
            None => cumulative,
        });
        prev = Some(cumulative);
    }

    let total_downloads: f64 = deltas.iter().sum();
    let latest_downloads = deltas.last().copied().unwrap_or(0.0);

    EpisodeSeries {
        title: title.to_string(),
        points,
        deltas,
        published_at,
        total_downloads,
        latest_downloads,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
