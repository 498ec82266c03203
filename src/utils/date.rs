use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn parse_date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        Some(v) => parse_date(v).ok_or_else(|| AppError::InvalidDate(v.to_string())),
        None => Ok(today()),
    }
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}
