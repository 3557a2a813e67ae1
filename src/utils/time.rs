//! Time utilities: parsing HH:MM and ISO timestamps, duration math,
//! formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Combine a date with an "HH:MM" time into a naive timestamp.
pub fn at(date: NaiveDate, time: &str) -> AppResult<NaiveDateTime> {
    let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;
    Ok(date.and_time(t))
}

/// Parse an ISO-ish timestamp as stored in the DB ("%Y-%m-%dT%H:%M:%S"
/// with optional fractional seconds).
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_roundtrip() {
        let dt = NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parse_datetime(&format_datetime(dt)), Some(dt));
    }

    #[test]
    fn format_minutes_handles_negatives() {
        assert_eq!(format_minutes(150), "02:30");
        assert_eq!(format_minutes(-30), "-00:30");
    }
}
