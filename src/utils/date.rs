use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match input {
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

/// Most recent Sunday on or before `day`.
pub fn start_of_week(day: NaiveDate) -> NaiveDate {
    let back = day.weekday().num_days_from_sunday() as u64;
    day.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

pub fn start_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// `day` minus `days` calendar days, saturating at the earliest date.
pub fn days_before(day: NaiveDate, days: u32) -> NaiveDate {
    day.checked_sub_days(Days::new(days as u64))
        .unwrap_or(NaiveDate::MIN)
}

/// Short US style date, e.g. "Oct 16, 2026".
pub fn format_date_short(day: NaiveDate) -> String {
    day.format("%b %-d, %Y").to_string()
}
