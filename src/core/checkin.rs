use crate::db::VisitStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Emotion, GradeLevel, NewVisit, Visit};
use crate::prefs::RecentStaff;
use crate::utils::{date, time};

/// Raw check-in input, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct CheckInForm {
    pub student_name: String,
    pub grade_level: String,
    pub staff_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, local time on `date`
    pub time_in: String,
    pub reason: String,
    pub emotion: String,
}

fn required(value: &str, field: &'static str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        Err(AppError::MissingField(field))
    } else {
        Ok(v.to_string())
    }
}

impl CheckInForm {
    /// Validate every field and build the visit to insert.
    ///
    /// The emotion is checked first, so a missing emotion is reported even
    /// when other fields are also incomplete.
    pub fn validate(&self) -> AppResult<NewVisit> {
        let emotion_raw = self.emotion.trim();
        if emotion_raw.is_empty() {
            return Err(AppError::MissingEmotion);
        }
        let emotion = Emotion::from_input(emotion_raw)
            .ok_or_else(|| AppError::InvalidEmotion(emotion_raw.to_string()))?;

        let student_name = required(&self.student_name, "student name")?;
        let grade_level = GradeLevel::from_input(&self.grade_level)
            .ok_or_else(|| AppError::InvalidGrade(self.grade_level.clone()))?;
        let staff_name = required(&self.staff_name, "staff name")?;
        let reason = required(&self.reason, "reason")?;

        let day =
            date::parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;
        let t = time::parse_time(&self.time_in)
            .ok_or_else(|| AppError::InvalidTime(self.time_in.clone()))?;
        let time_in = time::combine_date_time(day, t)?;

        Ok(NewVisit {
            student_name,
            grade_level,
            staff_name,
            date: day,
            time_in,
            reason,
            emotion,
        })
    }
}

/// High-level business logic for the `checkin` command.
pub struct CheckInLogic;

impl CheckInLogic {
    /// Validate, persist a new active visit and remember the staff name.
    ///
    /// Nothing reaches the store when validation fails. Saving the recent
    /// staff list is best effort.
    pub fn apply<S: VisitStore + ?Sized>(
        store: &mut S,
        recent: &mut RecentStaff,
        form: &CheckInForm,
    ) -> AppResult<Visit> {
        let new_visit = form.validate()?;
        let visit = store.insert_visit(&new_visit)?;

        tracing::debug!(id = visit.id, student = %visit.student_name, "visit created");

        if let Err(e) = recent.remember(&visit.staff_name) {
            tracing::warn!(error = %e, "failed to save recent staff names");
        }

        Ok(visit)
    }
}
