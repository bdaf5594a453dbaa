//! The query capability the visit logic depends on.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::db::query::VisitQuery;
use crate::errors::AppResult;
use crate::models::{NewVisit, Visit};
use chrono::{DateTime, Local};

/// Backing store for visits: insert-one-returning, update-by-id-returning,
/// filtered select and count.
pub trait VisitStore {
    fn insert_visit(&mut self, visit: &NewVisit) -> AppResult<Visit>;

    /// Set `time_out` on one visit. `Ok(None)` when no row matched.
    fn update_time_out(&mut self, id: i64, time_out: DateTime<Local>) -> AppResult<Option<Visit>>;

    fn select_visits(&self, query: &VisitQuery) -> AppResult<Vec<Visit>>;

    fn count_visits(&self, query: &VisitQuery) -> AppResult<i64>;
}

impl VisitStore for DbPool {
    fn insert_visit(&mut self, visit: &NewVisit) -> AppResult<Visit> {
        queries::insert_visit(&self.conn, visit)
    }

    fn update_time_out(&mut self, id: i64, time_out: DateTime<Local>) -> AppResult<Option<Visit>> {
        queries::update_time_out(&self.conn, id, time_out)
    }

    fn select_visits(&self, query: &VisitQuery) -> AppResult<Vec<Visit>> {
        queries::select_visits(&self.conn, query)
    }

    fn count_visits(&self, query: &VisitQuery) -> AppResult<i64> {
        queries::count_visits(&self.conn, query)
    }
}
