use crate::db::VisitStore;
use crate::errors::{AppError, AppResult};
use crate::models::Visit;
use chrono::{DateTime, Local};

/// High-level business logic for the `checkout` command.
pub struct CheckOutLogic;

impl CheckOutLogic {
    /// Set `time_out` on the visit. A visit that is already checked out is
    /// overwritten; the last write wins.
    pub fn apply<S: VisitStore + ?Sized>(
        store: &mut S,
        visit_id: i64,
        time_out: DateTime<Local>,
    ) -> AppResult<Visit> {
        let visit = store
            .update_time_out(visit_id, time_out)?
            .ok_or(AppError::VisitNotFound(visit_id))?;

        tracing::debug!(id = visit.id, "visit checked out");
        Ok(visit)
    }
}
