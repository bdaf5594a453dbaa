pub mod checkin;
pub mod checkout;
pub mod config;
pub mod current;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod staff;

use crate::cli::parser::FilterArgs;
use crate::db::DbPool;
use crate::db::initialize::open_db;
use crate::errors::{Action, AppError, AppResult};
use crate::models::{Emotion, GradeLevel, HistoryFilters};
use crate::utils::date::parse_optional_date;

/// Open the configured database; failures are reported for `action`.
pub(crate) fn open_store(database: &str, action: Action) -> AppResult<DbPool> {
    open_db(database).map_err(|e| e.collapse(action))
}

fn is_all(s: &str) -> bool {
    s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all")
}

pub(crate) fn parse_grade_filter(input: Option<&String>) -> AppResult<Option<GradeLevel>> {
    match input {
        Some(s) if !is_all(s) => GradeLevel::from_input(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidGrade(s.clone())),
        _ => Ok(None),
    }
}

pub(crate) fn parse_emotion_filter(input: Option<&String>) -> AppResult<Option<Emotion>> {
    match input {
        Some(s) if !is_all(s) => Emotion::from_input(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidEmotion(s.clone())),
        _ => Ok(None),
    }
}

/// Turn CLI filter flags into typed history filters.
pub(crate) fn history_filters(args: &FilterArgs, limit: Option<usize>) -> AppResult<HistoryFilters> {
    Ok(HistoryFilters {
        start_date: parse_optional_date(args.from.as_ref())?,
        end_date: parse_optional_date(args.to.as_ref())?,
        grade_level: parse_grade_filter(args.grade.as_ref())?,
        emotion: parse_emotion_filter(args.emotion.as_ref())?,
        student_name: args
            .student
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        limit,
    })
}
