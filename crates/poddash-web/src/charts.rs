//! Plotly figure specifications.
//!
//! Each builder returns a `{"data": [...], "layout": {...}}` JSON value ready
//! to hand to `Plotly.react` in the browser. NaN download values (malformed
//! source cells) serialise as `null`, which Plotly renders as a gap.

use poddash_core::formatting::{format_downloads, format_publish_date};
use poddash_data::aggregator::{EpisodeSeries, MonthlyRow};
use serde_json::{json, Value};

/// Bar color for the downloads series in the monthly chart.
const DOWNLOADS_COLOR: &str = "rgb(55, 83, 109)";
/// Bar color for the new-episodes series in the monthly chart.
const EPISODES_COLOR: &str = "rgb(26, 118, 255)";

// ── Monthly overview figure ───────────────────────────────────────────────────

/// Dual-axis grouped bar chart: total downloads on the primary y-axis, new
/// episode counts on the secondary, one bar group per month.
pub fn monthly_figure(rows: &[MonthlyRow]) -> Value {
    let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
    let downloads: Vec<f64> = rows.iter().map(|r| r.downloads_total).collect();
    let episodes: Vec<u32> = rows.iter().map(|r| r.episode_count).collect();

    json!({
        "data": [
            {
                "type": "bar",
                "name": "Total Downloads",
                "x": months,
                "y": downloads,
                "marker": {"color": DOWNLOADS_COLOR},
                "offsetgroup": 0,
            },
            {
                "type": "bar",
                "name": "New Episodes",
                "x": months,
                "y": episodes,
                "marker": {"color": EPISODES_COLOR},
                "offsetgroup": 1,
                "yaxis": "y2",
            },
        ],
        "layout": {
            "title": {"text": "Monthly Downloads and New Episodes"},
            "barmode": "group",
            "bargap": 0.15,
            "bargroupgap": 0.1,
            "legend": {
                "orientation": "h",
                "yanchor": "bottom",
                "y": 1.02,
                "xanchor": "right",
                "x": 1,
            },
            "xaxis": {"title": {"text": "Month"}},
            "yaxis": {"title": {"text": "Total Downloads"}},
            "yaxis2": {
                "title": {"text": "Number of New Episodes"},
                "overlaying": "y",
                "side": "right",
            },
        },
    })
}

// ── Per-episode figure ────────────────────────────────────────────────────────

/// Line chart of one episode's cumulative downloads over time.
///
/// The title is annotated with the publish date and running total; an empty
/// series (unknown title) produces an empty trace with a bare title.
pub fn episode_figure(series: &EpisodeSeries) -> Value {
    let x: Vec<String> = series.points.iter().map(|(ts, _)| ts.to_rfc3339()).collect();
    let y: Vec<f64> = series.points.iter().map(|&(_, v)| v).collect();

    let title = match series.published_at {
        Some(published) => format!(
            "Downloads Over Time - {}<br><sup>Published: {} | Total Downloads: {}</sup>",
            series.title,
            format_publish_date(published),
            format_downloads(series.total_downloads),
        ),
        None => format!("Downloads Over Time - {}", series.title),
    };

    json!({
        "data": [
            {
                "type": "scatter",
                "mode": "lines",
                "name": "Downloads",
                "x": x,
                "y": y,
            },
        ],
        "layout": {
            "title": {"text": title},
            "xaxis": {"title": {"text": "Date"}},
            "yaxis": {"title": {"text": "Downloads"}},
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
