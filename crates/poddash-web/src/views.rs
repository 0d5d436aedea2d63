//! View models returned by the JSON API.

use poddash_core::formatting::{format_downloads, format_publish_date};
use poddash_data::aggregator::{EpisodeSeries, MonthlyRow};
use serde::Serialize;
use serde_json::Value;

use crate::charts;

// ── MonthlyView ───────────────────────────────────────────────────────────────

/// Response body for `GET /api/monthly`.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyView {
    /// Plotly figure for the combined monthly chart.
    pub figure: Value,
}

impl MonthlyView {
    pub fn new(rows: &[MonthlyRow]) -> Self {
        MonthlyView {
            figure: charts::monthly_figure(rows),
        }
    }
}

// ── EpisodeView ───────────────────────────────────────────────────────────────

/// Response body for `GET /api/episode`: the per-episode chart plus the two
/// stat-card values, already formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeView {
    /// Plotly figure for the per-episode line chart.
    pub figure: Value,
    /// All-time downloads with thousands separators, e.g. `"12,345"`.
    pub total_downloads: String,
    /// Latest-period downloads with thousands separators.
    pub latest_downloads: String,
    /// Publish date, e.g. `"January 05, 2023"`; empty for an unknown title.
    pub published: String,
}

impl EpisodeView {
    pub fn new(series: &EpisodeSeries) -> Self {
        EpisodeView {
            figure: charts::episode_figure(series),
            total_downloads: format_downloads(series.total_downloads),
            latest_downloads: format_downloads(series.latest_downloads),
            published: series
                .published_at
                .map(format_publish_date)
                .unwrap_or_default(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
