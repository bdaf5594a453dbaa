//! Dashboard statistics.
//!
//! Seven independent aggregates. Each one turns a store failure into its
//! default value (0, an all-zero breakdown, an empty list) and logs it, so
//! a partial outage still renders a dashboard. Only failing to reach the
//! store at all fails the load, before any aggregate runs.

use crate::core::calculator::breakdown::{
    self, FrequentVisitor, TimeOfDay, emotion_breakdown, grade_breakdown, time_of_day_breakdown,
};
use crate::db::{Column, VisitQuery, VisitStore};
use crate::models::{DateWindow, Emotion, GradeLevel, Visit};
use crate::utils::date::{days_before, start_of_month, start_of_week};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub today_count: i64,
    pub week_count: i64,
    pub month_count: i64,
    pub grade_breakdown: BTreeMap<GradeLevel, i64>,
    pub emotion_breakdown: BTreeMap<Emotion, i64>,
    pub time_of_day_breakdown: TimeOfDay,
    pub frequent_visitors: Vec<FrequentVisitor>,
}

/// Look-back and threshold of the frequent visitors list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequentPolicy {
    pub days: u32,
    pub min_visits: usize,
}

impl Default for FrequentPolicy {
    fn default() -> Self {
        Self {
            days: 30,
            min_visits: 3,
        }
    }
}

fn count_or_zero<S: VisitStore + ?Sized>(store: &S, query: &VisitQuery, what: &str) -> i64 {
    store.count_visits(query).unwrap_or_else(|e| {
        tracing::warn!(aggregate = what, error = %e, "count failed, using 0");
        0
    })
}

fn rows_or_empty<S: VisitStore + ?Sized>(store: &S, query: &VisitQuery, what: &str) -> Vec<Visit> {
    store.select_visits(query).unwrap_or_else(|e| {
        tracing::warn!(aggregate = what, error = %e, "select failed, using no rows");
        Vec::new()
    })
}

fn window_query(window: &DateWindow) -> VisitQuery {
    VisitQuery::new().date_between(window.start, window.end)
}

pub fn today_count<S: VisitStore + ?Sized>(store: &S, now: &DateTime<Local>) -> i64 {
    let q = VisitQuery::new().eq(Column::Date, now.date_naive());
    count_or_zero(store, &q, "today")
}

/// Visits since the most recent Sunday.
pub fn week_count<S: VisitStore + ?Sized>(store: &S, now: &DateTime<Local>) -> i64 {
    let q = VisitQuery::new().gte(Column::Date, start_of_week(now.date_naive()));
    count_or_zero(store, &q, "week")
}

pub fn month_count<S: VisitStore + ?Sized>(store: &S, now: &DateTime<Local>) -> i64 {
    let q = VisitQuery::new().gte(Column::Date, start_of_month(now.date_naive()));
    count_or_zero(store, &q, "month")
}

pub fn grade_counts<S: VisitStore + ?Sized>(
    store: &S,
    window: &DateWindow,
) -> BTreeMap<GradeLevel, i64> {
    let rows = rows_or_empty(store, &window_query(window), "grade");
    grade_breakdown(&rows)
}

pub fn emotion_counts<S: VisitStore + ?Sized>(
    store: &S,
    window: &DateWindow,
) -> BTreeMap<Emotion, i64> {
    let rows = rows_or_empty(store, &window_query(window), "emotion");
    emotion_breakdown(&rows)
}

pub fn time_of_day_counts<S: VisitStore + ?Sized>(
    store: &S,
    window: &DateWindow,
) -> TimeOfDay {
    let rows = rows_or_empty(store, &window_query(window), "time_of_day");
    time_of_day_breakdown(&rows)
}

/// Frequent visitors over the trailing `policy.days`, regardless of the
/// dashboard window.
pub fn frequent_visitors<S: VisitStore + ?Sized>(
    store: &S,
    now: &DateTime<Local>,
    policy: FrequentPolicy,
) -> Vec<FrequentVisitor> {
    let since = days_before(now.date_naive(), policy.days);
    let rows = rows_or_empty(
        store,
        &VisitQuery::new().gte(Column::Date, since),
        "frequent_visitors",
    );
    breakdown::frequent_visitors(&rows, policy.min_visits)
}

pub struct DashboardLogic;

impl DashboardLogic {
    /// Compute all seven aggregates and combine them.
    pub fn stats<S: VisitStore + ?Sized>(
        store: &S,
        window: &DateWindow,
        now: &DateTime<Local>,
        policy: FrequentPolicy,
    ) -> DashboardStats {
        DashboardStats {
            today_count: today_count(store, now),
            week_count: week_count(store, now),
            month_count: month_count(store, now),
            grade_breakdown: grade_counts(store, window),
            emotion_breakdown: emotion_counts(store, window),
            time_of_day_breakdown: time_of_day_counts(store, window),
            frequent_visitors: frequent_visitors(store, now, policy),
        }
    }
}
