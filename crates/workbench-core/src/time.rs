use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use thiserror::Error;

// Naive inputs carry no offset and are read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("timestamp cannot be empty")]
    Empty,
    #[error("timestamp out of range: {0}")]
    OutOfRange(i64),
    #[error("invalid timestamp format: expected RFC 3339, YYYY-MM-DD HH:MM:SS or epoch seconds")]
    InvalidFormat,
}

/// Parses a timestamp and truncates it to the microsecond precision the store keeps.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).trunc_subsecs(6));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(Utc.from_utc_datetime(&naive).trunc_subsecs(6));
        }
    }

    if let Ok(secs) = trimmed.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp(secs, 0).ok_or(TimeParseError::OutOfRange(secs));
    }

    Err(TimeParseError::InvalidFormat)
}

pub fn to_micros(ts: &DateTime<Utc>) -> i64 {
    ts.timestamp_micros()
}

pub fn from_micros(micros: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_micros(micros)
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
