use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date-like string into a naive UTC date-time.
///
/// Purchase dates arrive as loosely formatted strings. Accepted forms, tried
/// in order: RFC 3339 (`2024-01-15T10:30:00Z`), naive ISO date-time
/// (`2024-01-15T10:30:00`), and plain date (`2024-01-15`, midnight).
/// Anything else is `None`; callers decide whether that means "exclude the
/// record" or "sentinel group".
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a date-like string into a millisecond timestamp for range
/// comparisons.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    parse_date(raw).map(|dt| dt.and_utc().timestamp_millis())
}
