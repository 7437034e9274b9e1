//! ISO-8601 timestamp parsing
//!
//! GitHub reports timestamps as RFC 3339 strings with a `Z` designator.
//! Offsets other than UTC are accepted and normalized; timestamps without
//! any offset are read as UTC, and a bare calendar date is midnight UTC.
//! Both the extended (`2024-01-15T10:30:00`) and basic (`20240115T103000`)
//! notations are understood.

use crate::error::FormatError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date-times carrying a numeric offset (`+0000`, `-02:30`)
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y%m%dT%H%M%S%.f%z"];

/// Date-times without offset, or with a literal `Z` in basic notation
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M%S%.fZ",
];

/// Calendar dates
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Parse an ISO-8601 timestamp into a UTC instant
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, FormatError> {
    let trimmed = value.trim();

    let rfc_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(parsed) => return Ok(parsed.with_timezone(&Utc)),
        Err(e) => e,
    };

    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
        .ok_or_else(|| FormatError::invalid_timestamp(value, rfc_err.to_string()))
}
