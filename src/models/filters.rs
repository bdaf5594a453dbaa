use super::{emotion::Emotion, grade::GradeLevel};
use chrono::NaiveDate;

/// Filters of the history view, shared by the CSV export.
///
/// `None` means "all" for every field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub grade_level: Option<GradeLevel>,
    pub emotion: Option<Emotion>,
    /// Case-insensitive substring of the student name.
    pub student_name: Option<String>,
    pub limit: Option<usize>,
}

/// Optional inclusive date window of the dashboard breakdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}
