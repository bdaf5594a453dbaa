// src/export/model.rs

use crate::core::calculator::duration::duration_minutes;
use crate::models::Visit;
use crate::utils::time::format_time_12h;

/// Flat, display-ready row of the visits export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitExport {
    pub date: String,
    pub student_name: String,
    pub grade: String,
    pub staff_name: String,
    pub time_in: String,
    pub time_out: String,
    /// Blank while the visit is still active.
    pub duration_minutes: String,
    pub emotion: String,
    pub reason: String,
}

impl From<&Visit> for VisitExport {
    fn from(v: &Visit) -> Self {
        Self {
            date: v.date_str(),
            student_name: v.student_name.clone(),
            grade: v.grade_level.label().to_string(),
            staff_name: v.staff_name.clone(),
            time_in: format_time_12h(&v.time_in),
            time_out: v.time_out.as_ref().map(format_time_12h).unwrap_or_default(),
            duration_minutes: v
                .time_out
                .as_ref()
                .map(|out| duration_minutes(&v.time_in, out).to_string())
                .unwrap_or_default(),
            emotion: v.emotion.label().to_string(),
            reason: v.reason.clone(),
        }
    }
}

impl VisitExport {
    pub(crate) fn to_record(&self) -> [&str; 9] {
        [
            &self.date,
            &self.student_name,
            &self.grade,
            &self.staff_name,
            &self.time_in,
            &self.time_out,
            &self.duration_minutes,
            &self.emotion,
            &self.reason,
        ]
    }
}

/// Header row of the CSV export.
pub(crate) fn get_headers() -> [&'static str; 9] {
    [
        "Date",
        "Student Name",
        "Grade",
        "Staff Name",
        "Time In",
        "Time Out",
        "Duration (minutes)",
        "Emotion",
        "Reason",
    ]
}
