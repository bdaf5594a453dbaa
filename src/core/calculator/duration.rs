//! Elapsed-time labels and checked-out durations.

use chrono::{DateTime, Local};

/// Whole minutes elapsed since `time_in`, rounded down.
pub fn elapsed_minutes(time_in: &DateTime<Local>, now: &DateTime<Local>) -> i64 {
    (*now - *time_in).num_milliseconds().div_euclid(60_000)
}

/// Human label for how long an active visit has lasted so far.
///
/// Anything under a minute, including a `time_in` in the future, is
/// "Just arrived".
pub fn duration_label(time_in: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let mins = elapsed_minutes(time_in, now);

    if mins < 1 {
        "Just arrived".to_string()
    } else if mins == 1 {
        "1 minute".to_string()
    } else if mins < 60 {
        format!("{} minutes", mins)
    } else {
        format!("{}h {}m", mins / 60, mins % 60)
    }
}

/// Length of a finished visit in minutes, rounded to the nearest minute.
///
/// The sign is dropped, so a `time_out` before `time_in` still yields a
/// positive length.
pub fn duration_minutes(time_in: &DateTime<Local>, time_out: &DateTime<Local>) -> i64 {
    let ms = (*time_out - *time_in).num_milliseconds().abs();
    (ms + 30_000) / 60_000
}
