use chrono::{DateTime, Local};
use zenden::core::dashboard::{month_count, today_count, week_count};
use zenden::core::{DashboardLogic, FrequentPolicy};
use zenden::db::{DbPool, VisitQuery, VisitStore};
use zenden::errors::{AppError, AppResult};
use zenden::models::{DateWindow, Emotion, GradeLevel, NewVisit, Visit};
use zenden::utils::date::start_of_week;

mod common;
use common::{day, local, memory_store, new_visit};

fn now() -> DateTime<Local> {
    // Wednesday; the week started on Sunday Oct 11
    local(2026, 10, 14, 15, 0)
}

fn seeded() -> DbPool {
    let mut store = memory_store();
    for (name, grade, emotion, at) in [
        ("Sam", GradeLevel::G3, Emotion::Angry, local(2026, 8, 1, 10, 0)),
        ("Sam", GradeLevel::G3, Emotion::Angry, local(2026, 10, 1, 9, 0)),
        ("Lee", GradeLevel::G5, Emotion::Sad, local(2026, 10, 2, 11, 0)),
        ("Sam", GradeLevel::G3, Emotion::Tired, local(2026, 10, 5, 10, 0)),
        ("Sam", GradeLevel::G3, Emotion::Angry, local(2026, 10, 12, 13, 0)),
        ("Lee", GradeLevel::G5, Emotion::Sad, local(2026, 10, 13, 12, 30)),
        ("Lee", GradeLevel::G5, Emotion::Other, local(2026, 10, 14, 8, 30)),
        ("Pat", GradeLevel::K, Emotion::Overwhelmed, local(2026, 10, 14, 9, 15)),
        ("Sam", GradeLevel::G3, Emotion::Frustrated, local(2026, 10, 14, 14, 0)),
    ] {
        store.insert_visit(&new_visit(name, grade, emotion, at)).unwrap();
    }
    store
}

#[test]
fn counts_for_today_week_and_month() {
    let store = seeded();
    assert_eq!(today_count(&store, &now()), 3);
    assert_eq!(week_count(&store, &now()), 5);
    assert_eq!(month_count(&store, &now()), 8);
}

#[test]
fn week_starts_on_sunday_and_includes_it() {
    let mut store = seeded();
    for at in [local(2026, 10, 10, 10, 0), local(2026, 10, 11, 10, 0)] {
        store
            .insert_visit(&new_visit("Kai", GradeLevel::G1, Emotion::Sad, at))
            .unwrap();
    }

    // Saturday Oct 10 falls in the previous week
    assert_eq!(week_count(&store, &now()), 6);
}

#[test]
fn week_count_on_a_sunday_starts_that_day() {
    let mut store = memory_store();
    for at in [local(2026, 10, 10, 10, 0), local(2026, 10, 11, 9, 0)] {
        store
            .insert_visit(&new_visit("Kai", GradeLevel::G1, Emotion::Sad, at))
            .unwrap();
    }

    let sunday = local(2026, 10, 11, 15, 0);
    assert_eq!(week_count(&store, &sunday), 1);
    assert_eq!(today_count(&store, &sunday), 1);
}

#[test]
fn start_of_week_is_the_latest_sunday() {
    assert_eq!(start_of_week(day(2026, 10, 11)), day(2026, 10, 11));
    assert_eq!(start_of_week(day(2026, 10, 14)), day(2026, 10, 11));
    assert_eq!(start_of_week(day(2026, 10, 17)), day(2026, 10, 11));
    // Across a month boundary
    assert_eq!(start_of_week(day(2026, 11, 3)), day(2026, 11, 1));
    assert_eq!(start_of_week(day(2026, 10, 31)), day(2026, 10, 25));
}

#[test]
fn breakdowns_cover_every_key_and_sum_to_total() {
    let store = seeded();
    let stats = DashboardLogic::stats(&store, &DateWindow::default(), &now(), FrequentPolicy::default());

    assert_eq!(stats.grade_breakdown.len(), 9);
    assert_eq!(stats.emotion_breakdown.len(), 7);
    assert_eq!(stats.grade_breakdown.values().sum::<i64>(), 9);
    assert_eq!(stats.emotion_breakdown.values().sum::<i64>(), 9);

    assert_eq!(stats.grade_breakdown[&GradeLevel::G3], 5);
    assert_eq!(stats.grade_breakdown[&GradeLevel::G5], 3);
    assert_eq!(stats.grade_breakdown[&GradeLevel::K], 1);
    assert_eq!(stats.grade_breakdown[&GradeLevel::G8], 0);
    assert_eq!(stats.emotion_breakdown[&Emotion::AnxiousWorried], 0);

    assert_eq!(stats.time_of_day_breakdown.morning, 6);
    assert_eq!(stats.time_of_day_breakdown.afternoon, 3);
}

#[test]
fn window_limits_breakdowns_but_not_counts() {
    let store = seeded();
    let window = DateWindow::new(Some(day(2026, 10, 12)), Some(day(2026, 10, 13)));
    let stats = DashboardLogic::stats(&store, &window, &now(), FrequentPolicy::default());

    assert_eq!(stats.grade_breakdown.values().sum::<i64>(), 2);
    assert_eq!(stats.today_count, 3);
}

#[test]
fn frequent_visitors_over_trailing_thirty_days() {
    let store = seeded();
    let stats = DashboardLogic::stats(&store, &DateWindow::default(), &now(), FrequentPolicy::default());

    let got: Vec<(&str, GradeLevel, i64)> = stats
        .frequent_visitors
        .iter()
        .map(|f| (f.student_name.as_str(), f.grade_level, f.visit_count))
        .collect();
    assert_eq!(got, [("Sam", GradeLevel::G3, 4), ("Lee", GradeLevel::G5, 3)]);

    let strict = FrequentPolicy {
        days: 30,
        min_visits: 4,
    };
    let stats = DashboardLogic::stats(&store, &DateWindow::default(), &now(), strict);
    assert_eq!(stats.frequent_visitors.len(), 1);
}

#[test]
fn empty_store_gives_zeroed_dashboard() {
    let store = memory_store();
    let stats = DashboardLogic::stats(&store, &DateWindow::default(), &now(), FrequentPolicy::default());

    assert_eq!(stats.today_count, 0);
    assert!(stats.grade_breakdown.values().all(|v| *v == 0));
    assert!(stats.frequent_visitors.is_empty());
}

struct BrokenStore;

impl VisitStore for BrokenStore {
    fn insert_visit(&mut self, _visit: &NewVisit) -> AppResult<Visit> {
        Err(AppError::Other("offline".into()))
    }

    fn update_time_out(&mut self, _id: i64, _time_out: DateTime<Local>) -> AppResult<Option<Visit>> {
        Err(AppError::Other("offline".into()))
    }

    fn select_visits(&self, _query: &VisitQuery) -> AppResult<Vec<Visit>> {
        Err(AppError::Other("offline".into()))
    }

    fn count_visits(&self, _query: &VisitQuery) -> AppResult<i64> {
        Err(AppError::Other("offline".into()))
    }
}

#[test]
fn failing_store_falls_back_to_defaults() {
    let stats = DashboardLogic::stats(&BrokenStore, &DateWindow::default(), &now(), FrequentPolicy::default());

    assert_eq!(stats.today_count, 0);
    assert_eq!(stats.week_count, 0);
    assert_eq!(stats.month_count, 0);
    assert_eq!(stats.grade_breakdown.len(), 9);
    assert_eq!(stats.emotion_breakdown.len(), 7);
    assert_eq!(stats.time_of_day_breakdown.morning + stats.time_of_day_breakdown.afternoon, 0);
    assert!(stats.frequent_visitors.is_empty());
}

#[test]
fn three_visits_make_a_frequent_visitor_two_do_not() {
    let mut store = memory_store();
    for (name, grade, d) in [
        ("Sam", GradeLevel::G4, 10),
        ("Lee", GradeLevel::G2, 11),
        ("Sam", GradeLevel::G4, 12),
        ("Lee", GradeLevel::G2, 13),
        ("Sam", GradeLevel::G4, 14),
    ] {
        store
            .insert_visit(&new_visit(name, grade, Emotion::Sad, local(2026, 10, d, 10, 0)))
            .unwrap();
    }

    let stats = DashboardLogic::stats(&store, &DateWindow::default(), &now(), FrequentPolicy::default());
    assert_eq!(stats.frequent_visitors.len(), 1);
    assert_eq!(stats.frequent_visitors[0].student_name, "Sam");
    assert_eq!(stats.frequent_visitors[0].grade_level, GradeLevel::G4);
    assert_eq!(stats.frequent_visitors[0].visit_count, 3);
}
