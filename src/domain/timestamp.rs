//! ISO-8601 timestamp capture and parsing
//!
//! Timestamps are stored as naive local ISO-8601 strings (`2025-01-17T09:30:00.000000`)
//! so journal files written by earlier tools round-trip untouched. Parsing only
//! happens when a computation needs the instant.

use crate::error::{DecisionError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Accepted naive layouts, tried in order. `%.f` also matches a missing fraction.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Current local time, formatted for storage
pub fn now() -> String {
    format(Local::now().naive_local())
}

/// Format an instant for storage
pub fn format(at: NaiveDateTime) -> String {
    at.format(STORAGE_FORMAT).to_string()
}

/// Parse a stored timestamp into a naive local instant.
///
/// RFC 3339 values carrying an offset are converted to local time; a bare
/// date means midnight.
pub fn parse(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();

    let first_err = match NaiveDateTime::parse_from_str(trimmed, NAIVE_FORMATS[0]) {
        Ok(at) => return Ok(at),
        Err(e) => e,
    };

    for fmt in &NAIVE_FORMATS[1..] {
        if let Ok(at) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(at);
        }
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(at.with_timezone(&Local).naive_local());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(DecisionError::InvalidTimestamp {
        value: value.to_string(),
        source: first_err,
    })
}
