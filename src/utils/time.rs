//! Time utilities: parsing HH:MM, combining date and time, store timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, SecondsFormat, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Combine a calendar date and a time of day into one local instant.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant; times
/// that do not exist locally are rejected.
pub fn combine_date_time(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Local>> {
    date.and_time(time)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{} {} does not exist locally", date, time)))
}

/// Fixed-width UTC text: lexical order equals chronological order.
pub fn to_db_timestamp(dt: &DateTime<Local>) -> String {
    dt.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn parse_db_timestamp(s: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}

/// Localized 12-hour clock, e.g. "9:05 AM".
pub fn format_time_12h(dt: &DateTime<Local>) -> String {
    dt.format("%-I:%M %p").to_string()
}

pub fn format_time_input(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M").to_string()
}
