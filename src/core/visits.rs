//! Read side of the visit lifecycle.

use crate::db::{Column, VisitQuery, VisitStore};
use crate::errors::AppResult;
use crate::models::{HistoryFilters, Visit};

/// Query for visits without a checkout time, earliest arrival first.
pub fn active_query() -> VisitQuery {
    VisitQuery::new()
        .is_null(Column::TimeOut)
        .order(Column::TimeIn, true)
}

/// Query for the history view: newest day first, then newest check-in.
pub fn history_query(filters: &HistoryFilters) -> VisitQuery {
    let mut q = VisitQuery::new()
        .order(Column::Date, false)
        .order(Column::TimeIn, false)
        .date_between(filters.start_date, filters.end_date);

    if let Some(g) = filters.grade_level {
        q = q.eq(Column::GradeLevel, g);
    }
    if let Some(e) = filters.emotion {
        q = q.eq(Column::Emotion, e);
    }
    if let Some(name) = filters.student_name.as_deref().map(str::trim)
        && !name.is_empty()
    {
        q = q.ilike(Column::StudentName, name);
    }
    if let Some(limit) = filters.limit {
        q = q.limit(limit);
    }
    q
}

pub fn list_active<S: VisitStore + ?Sized>(store: &S) -> AppResult<Vec<Visit>> {
    store.select_visits(&active_query())
}

pub fn count_active<S: VisitStore + ?Sized>(store: &S) -> AppResult<i64> {
    store.count_visits(&VisitQuery::new().is_null(Column::TimeOut))
}

pub fn list_all<S: VisitStore + ?Sized>(store: &S, filters: &HistoryFilters) -> AppResult<Vec<Visit>> {
    store.select_visits(&history_query(filters))
}

pub fn find_visit<S: VisitStore + ?Sized>(store: &S, id: i64) -> AppResult<Option<Visit>> {
    let mut rows = store.select_visits(&VisitQuery::new().eq(Column::Id, id).limit(1))?;
    Ok(rows.pop())
}
