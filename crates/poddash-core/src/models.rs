use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ── EpisodeRecord ─────────────────────────────────────────────────────────────

/// A single download snapshot read from the metrics CSV.
///
/// The source table carries one row per (episode, reporting interval) pair;
/// `downloads_total` is the cumulative download count for the episode as of
/// `interval`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Episode title. Non-unique across rows, but uniquely identifies the
    /// episode's metadata (publish date is constant per title).
    pub episode_title: String,
    /// UTC timestamp when the episode was published.
    pub published_at: DateTime<Utc>,
    /// UTC timestamp of the reporting snapshot.
    pub interval: DateTime<Utc>,
    /// Cumulative downloads as of `interval`. Expected non-decreasing within
    /// an episode's series; `NaN` when the source cell was malformed.
    pub downloads_total: f64,
}

// ── EpisodeDataset ────────────────────────────────────────────────────────────

/// The full parsed dataset, immutable after load.
#[derive(Debug, Clone, Default)]
pub struct EpisodeDataset {
    /// All snapshot records in file order.
    pub records: Vec<EpisodeRecord>,
    /// Unique episode titles in first-occurrence order. Populates the
    /// dropdown; the first entry is the default selection.
    pub episode_titles: Vec<String>,
}

impl EpisodeDataset {
    /// Build the title index from the loaded records.
    pub fn from_records(records: Vec<EpisodeRecord>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut episode_titles: Vec<String> = Vec::new();

        for rec in &records {
            if seen.insert(rec.episode_title.as_str()) {
                episode_titles.push(rec.episode_title.clone());
            }
        }

        EpisodeDataset {
            records,
            episode_titles,
        }
    }

    /// Default dropdown selection: the first episode title in file order.
    pub fn first_title(&self) -> Option<&str> {
        self.episode_titles.first().map(String::as_str)
    }

    /// Whether `title` names an episode present in the dataset.
    pub fn contains_title(&self, title: &str) -> bool {
        self.episode_titles.iter().any(|t| t == title)
    }

    /// Number of snapshot records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(title: &str, downloads: f64) -> EpisodeRecord {
        EpisodeRecord {
            episode_title: title.to_string(),
            published_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            interval: Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap(),
            downloads_total: downloads,
        }
    }

    // ── from_records ──────────────────────────────────────────────────────────

    #[test]
    fn test_titles_unique_first_occurrence_order() {
        let ds = EpisodeDataset::from_records(vec![
            record("Episode B", 10.0),
            record("Episode A", 20.0),
            record("Episode B", 30.0),
            record("Episode C", 40.0),
        ]);
        assert_eq!(ds.episode_titles, vec!["Episode B", "Episode A", "Episode C"]);
    }

    #[test]
    fn test_first_title_matches_file_order() {
        let ds = EpisodeDataset::from_records(vec![
            record("Episode Z", 1.0),
            record("Episode A", 2.0),
        ]);
        assert_eq!(ds.first_title(), Some("Episode Z"));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = EpisodeDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
        assert!(ds.first_title().is_none());
        assert!(ds.episode_titles.is_empty());
    }

    // ── contains_title ────────────────────────────────────────────────────────

    #[test]
    fn test_contains_title() {
        let ds = EpisodeDataset::from_records(vec![record("Episode A", 1.0)]);
        assert!(ds.contains_title("Episode A"));
        assert!(!ds.contains_title("Episode X"));
    }
}
