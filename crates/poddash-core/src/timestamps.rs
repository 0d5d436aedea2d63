//! Timestamp parsing for the metrics CSV and calendar-month bucketing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse a timestamp string from the metrics CSV into a UTC [`DateTime`].
///
/// Handles the formats commonly produced by podcast-hosting exports:
/// * RFC 3339 / ISO 8601 with offset (including `Z` suffix)
/// * `YYYY-MM-DD HH:MM:SS` (naive, treated as UTC)
/// * `YYYY-MM-DDTHH:MM:SS` (naive, treated as UTC)
/// * `YYYY-MM-DD` (midnight UTC)
///
/// Returns `None` when no format matches.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // RFC 3339 with explicit offset.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Naive date-time patterns, assumed UTC.
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    // Bare date → midnight UTC.
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}

// ── Month bucketing ───────────────────────────────────────────────────────────

/// Calendar-month key for a timestamp, e.g. `"2023-02"`.
///
/// Keys sort lexicographically in chronological order, so they can be used
/// directly as `BTreeMap` keys when building monthly series.
pub fn month_key(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m").to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
