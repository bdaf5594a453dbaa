use super::{emotion::Emotion, grade::GradeLevel};
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// One check-in/check-out record, as stored in the `visits` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visit {
    pub id: i64,                          // ⇔ visits.id
    pub student_name: String,             // ⇔ visits.student_name
    pub grade_level: GradeLevel,          // ⇔ visits.grade_level ('K','1'..'8')
    pub staff_name: String,               // ⇔ visits.staff_name
    pub date: NaiveDate,                  // ⇔ visits.date (TEXT "YYYY-MM-DD")
    pub time_in: DateTime<Local>,         // ⇔ visits.time_in (TEXT, UTC)
    pub time_out: Option<DateTime<Local>>, // ⇔ visits.time_out (NULL while active)
    pub reason: String,                   // ⇔ visits.reason
    pub emotion: Emotion,                 // ⇔ visits.emotion
    pub created_at: String,               // ⇔ visits.created_at (ISO8601)
}

impl Visit {
    /// A visit is active until it has a checkout time.
    pub fn is_active(&self) -> bool {
        self.time_out.is_none()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// A validated check-in, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVisit {
    pub student_name: String,
    pub grade_level: GradeLevel,
    pub staff_name: String,
    pub date: NaiveDate,
    pub time_in: DateTime<Local>,
    pub reason: String,
    pub emotion: Emotion,
}
