//! Time utilities: the fixed textual timestamp form used by the store,
//! wall-clock parsing and minute arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime};

/// Storage / CLI timestamp form, second precision.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FMT).to_string()
}

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FMT)
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

/// Accepts `HH:MM:SS` or `HH:MM`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Minutes from `start` to `end`; an `end` before `start` is taken to be on
/// the following day.
pub fn minutes_between_wrapping(start: NaiveTime, end: NaiveTime) -> i64 {
    let mins = (end - start).num_minutes();
    if mins < 0 { mins + 24 * 60 } else { mins }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_roundtrip_text_form() {
        let ts = parse_timestamp("2018-09-07 06:50:35").unwrap();
        assert_eq!(format_timestamp(&ts), "2018-09-07 06:50:35");
    }

    #[test]
    fn rejects_minute_precision_timestamp() {
        assert!(matches!(
            parse_timestamp("2018-09-07 06:50"),
            Err(AppError::InvalidTime(_))
        ));
    }

    #[test]
    fn parse_time_accepts_both_forms() {
        assert_eq!(parse_time("07:00"), NaiveTime::from_hms_opt(7, 0, 0));
        assert_eq!(parse_time("07:00:30"), NaiveTime::from_hms_opt(7, 0, 30));
        assert_eq!(parse_time("7h"), None);
    }
}
