//! Local-time timestamp formatting
//!
//! Converts between epoch seconds and `YYYY-MM-DD HH:MM:SS` strings in the
//! local timezone.
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::error::{RepoStoreError, Result};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format epoch seconds as a local `YYYY-MM-DD HH:MM:SS` string.
///
/// Sub-second precision is dropped.
pub fn format_timestamp(timestamp: f64) -> Result<String> {
    if !timestamp.is_finite() {
        return Err(RepoStoreError::Timestamp(format!(
            "Timestamp is not a finite number: {}",
            timestamp
        )));
    }

    let secs = timestamp.floor();
    let nanos = ((timestamp - secs) * 1e9) as u32;
    let utc = DateTime::from_timestamp(secs as i64, nanos.min(999_999_999)).ok_or_else(|| {
        RepoStoreError::Timestamp(format!("Timestamp out of range: {}", timestamp))
    })?;

    Ok(utc.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string())
}

/// Parse a local `YYYY-MM-DD HH:MM:SS` string into epoch seconds
pub fn parse_timestamp(date_string: &str) -> Result<f64> {
    let naive = NaiveDateTime::parse_from_str(date_string, TIMESTAMP_FORMAT).map_err(|e| {
        RepoStoreError::Timestamp(format!(
            "'{}' does not match format '{}': {}",
            date_string, TIMESTAMP_FORMAT, e
        ))
    })?;

    // Ambiguous times (DST fall-back) take the earlier instant
    let local = Local.from_local_datetime(&naive).earliest().ok_or_else(|| {
        RepoStoreError::Timestamp(format!(
            "'{}' does not exist in the local timezone",
            date_string
        ))
    })?;

    Ok(local.timestamp() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_format_roundtrip() {
        let ts = parse_timestamp("2024-01-15 10:30:00").unwrap();
        assert_eq!(format_timestamp(ts).unwrap(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_format_then_parse_roundtrip() {
        let ts = 1_700_000_000.0;
        let formatted = format_timestamp(ts).unwrap();
        assert_eq!(parse_timestamp(&formatted).unwrap(), ts);
    }

    #[test]
    fn test_format_drops_fraction() {
        let whole = format_timestamp(1_700_000_000.0).unwrap();
        let fractional = format_timestamp(1_700_000_000.75).unwrap();
        assert_eq!(whole, fractional);
    }

    #[test]
    fn test_parse_rejects_wrong_format() {
        assert!(matches!(
            parse_timestamp("15/01/2024 10:30"),
            Err(RepoStoreError::Timestamp(_))
        ));
        assert!(matches!(
            parse_timestamp("2024-01-15T10:30:00"),
            Err(RepoStoreError::Timestamp(_))
        ));
        assert!(matches!(
            parse_timestamp("2024-01-15 10:30:00 extra"),
            Err(RepoStoreError::Timestamp(_))
        ));
    }

    #[test]
    fn test_format_rejects_non_finite() {
        assert!(format_timestamp(f64::NAN).is_err());
        assert!(format_timestamp(f64::INFINITY).is_err());
        assert!(format_timestamp(1e30).is_err());
    }
}
