//! # Temporal Rules
//!
//! `lastUpdated` is stored as text. Two different readings apply:
//!
//! - **Validation** is strict: the string must be exactly the canonical
//!   UTC form `YYYY-MM-DDTHH:MM:SS.sssZ`, i.e. parsing it and rendering it
//!   back yields the same bytes. `2024-01-15` or `2024-01-15T00:00:00Z`
//!   describe valid instants but are rejected because they are not
//!   normalized.
//!
//! - **Sorting and display** are lenient: anything RFC 3339, a bare
//!   `YYYY-MM-DD` date, or a naive `YYYY-MM-DDTHH:MM:SS` is read as UTC.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::OpenStartupError;

/// Render a timestamp in the canonical `YYYY-MM-DDTHH:MM:SS.sssZ` form.
pub fn to_canonical_iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a timestamp that must already be in canonical form.
///
/// # Errors
///
/// Returns [`OpenStartupError::InvalidTimestamp`] if the string is not
/// RFC 3339, or if its canonical rendering differs from the input.
pub fn parse_canonical(s: &str) -> Result<DateTime<Utc>, OpenStartupError> {
    let dt = DateTime::parse_from_rfc3339(s)
        .map_err(|e| OpenStartupError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })?
        .with_timezone(&Utc);

    let canonical = to_canonical_iso8601(&dt);
    if canonical != s {
        return Err(OpenStartupError::InvalidTimestamp {
            value: s.to_string(),
            reason: format!("not in canonical form (expected {canonical})"),
        });
    }
    Ok(dt)
}

/// True if `s` round-trips exactly through parse and canonical rendering.
pub fn is_canonical_iso8601(s: &str) -> bool {
    parse_canonical(s).is_ok()
}

/// Lenient parse for sorting and display. All readings are UTC.
pub fn parse_lenient(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sort key for an optional timestamp: milliseconds since the Unix epoch,
/// with missing or unparseable values at the epoch itself.
pub fn sort_millis(value: Option<&str>) -> i64 {
    value
        .and_then(parse_lenient)
        .map_or(0, |dt| dt.timestamp_millis())
}

/// The current calendar year (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}
