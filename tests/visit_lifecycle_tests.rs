use chrono::Duration;
use zenden::core::visits::{count_active, find_visit, list_active, list_all};
use zenden::core::{CheckInForm, CheckInLogic, CheckOutLogic, CurrentView};
use zenden::db::VisitStore;
use zenden::errors::AppError;
use zenden::models::{Emotion, GradeLevel, HistoryFilters};
use zenden::prefs::RecentStaff;

mod common;
use common::{day, local, memory_store, new_visit, temp_out};

fn alex_form() -> CheckInForm {
    CheckInForm {
        student_name: "Alex R.".to_string(),
        grade_level: "3".to_string(),
        staff_name: "Ms. Lopez".to_string(),
        date: "2026-10-14".to_string(),
        time_in: "10:05".to_string(),
        reason: "Needed a break".to_string(),
        emotion: "Sad".to_string(),
    }
}

#[test]
fn checkin_then_checkout_round_trip() {
    let mut store = memory_store();
    let mut recent = RecentStaff::load(temp_out("lifecycle_recent", "json"));

    let visit = CheckInLogic::apply(&mut store, &mut recent, &alex_form()).unwrap();
    assert_eq!(visit.student_name, "Alex R.");
    assert_eq!(visit.grade_level, GradeLevel::G3);
    assert_eq!(visit.emotion, Emotion::Sad);
    assert_eq!(visit.date, day(2026, 10, 14));
    assert_eq!(visit.time_in, local(2026, 10, 14, 10, 5));
    assert!(visit.is_active());
    assert!(!visit.created_at.is_empty());
    assert_eq!(recent.most_recent(), Some("Ms. Lopez"));

    let active = list_active(&store).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, visit.id);
    assert_eq!(count_active(&store).unwrap(), 1);

    let out = visit.time_in + Duration::minutes(25);
    let done = CheckOutLogic::apply(&mut store, visit.id, out).unwrap();
    assert_eq!(done.time_out, Some(out));
    assert!(!done.is_active());

    assert!(list_active(&store).unwrap().is_empty());
    let history = list_all(&store, &HistoryFilters::default()).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].time_out, Some(out));
}

#[test]
fn missing_emotion_is_reported_first_and_nothing_is_stored() {
    let mut store = memory_store();
    let mut recent = RecentStaff::load(temp_out("lifecycle_no_emotion", "json"));
    let form = CheckInForm {
        emotion: String::new(),
        student_name: String::new(),
        ..alex_form()
    };

    let err = CheckInLogic::apply(&mut store, &mut recent, &form).unwrap_err();
    assert!(matches!(err, AppError::MissingEmotion));
    assert_eq!(err.to_string(), "Please select how the student is feeling.");
    assert_eq!(count_active(&store).unwrap(), 0);
    assert!(recent.names().is_empty());
}

#[test]
fn invalid_fields_are_rejected() {
    let bad_grade = CheckInForm {
        grade_level: "9".to_string(),
        ..alex_form()
    };
    assert!(matches!(bad_grade.validate(), Err(AppError::InvalidGrade(_))));

    let bad_emotion = CheckInForm {
        emotion: "Happy".to_string(),
        ..alex_form()
    };
    assert!(matches!(bad_emotion.validate(), Err(AppError::InvalidEmotion(_))));

    let blank_reason = CheckInForm {
        reason: "   ".to_string(),
        ..alex_form()
    };
    assert!(matches!(blank_reason.validate(), Err(AppError::MissingField(_))));

    let bad_time = CheckInForm {
        time_in: "25:00".to_string(),
        ..alex_form()
    };
    assert!(matches!(bad_time.validate(), Err(AppError::InvalidTime(_))));
}

#[test]
fn grade_and_emotion_input_aliases() {
    let form = CheckInForm {
        grade_level: "kindergarten".to_string(),
        emotion: "anxious".to_string(),
        ..alex_form()
    };
    let v = form.validate().unwrap();
    assert_eq!(v.grade_level, GradeLevel::K);
    assert_eq!(v.emotion, Emotion::AnxiousWorried);
}

#[test]
fn checkout_of_unknown_visit_is_not_found() {
    let mut store = memory_store();
    let err = CheckOutLogic::apply(&mut store, 42, local(2026, 10, 14, 11, 0)).unwrap_err();
    assert!(matches!(err, AppError::VisitNotFound(42)));
}

#[test]
fn active_visits_are_ordered_by_arrival() {
    let mut store = memory_store();
    store
        .insert_visit(&new_visit("Late", GradeLevel::G2, Emotion::Tired, local(2026, 10, 14, 11, 0)))
        .unwrap();
    store
        .insert_visit(&new_visit("Early", GradeLevel::G4, Emotion::Angry, local(2026, 10, 14, 8, 30)))
        .unwrap();

    let view = CurrentView::load(&store).unwrap();
    let names: Vec<&str> = view.visits().iter().map(|v| v.student_name.as_str()).collect();
    assert_eq!(names, ["Early", "Late"]);

    let cards = view.cards(&local(2026, 10, 14, 11, 0));
    assert_eq!(cards[0].duration, "2h 30m");
    assert_eq!(cards[1].duration, "Just arrived");
}

#[test]
fn history_is_newest_first_and_filterable() {
    let mut store = memory_store();
    for (name, grade, emotion, at) in [
        ("Alex R.", GradeLevel::G3, Emotion::Sad, local(2026, 10, 1, 9, 0)),
        ("Sally", GradeLevel::G5, Emotion::Angry, local(2026, 10, 5, 13, 0)),
        ("Bo", GradeLevel::K, Emotion::Sad, local(2026, 10, 5, 9, 0)),
        ("50% Kid", GradeLevel::G1, Emotion::Other, local(2026, 10, 9, 9, 0)),
    ] {
        store.insert_visit(&new_visit(name, grade, emotion, at)).unwrap();
    }

    let all = list_all(&store, &HistoryFilters::default()).unwrap();
    let names: Vec<&str> = all.iter().map(|v| v.student_name.as_str()).collect();
    assert_eq!(names, ["50% Kid", "Sally", "Bo", "Alex R."]);

    let by_name = list_all(
        &store,
        &HistoryFilters {
            student_name: Some("AL".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(by_name.len(), 2);

    let percent = list_all(
        &store,
        &HistoryFilters {
            student_name: Some("%".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].student_name, "50% Kid");

    let sad_in_range = list_all(
        &store,
        &HistoryFilters {
            start_date: Some(day(2026, 10, 2)),
            end_date: Some(day(2026, 10, 5)),
            emotion: Some(Emotion::Sad),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(sad_in_range.len(), 1);
    assert_eq!(sad_in_range[0].student_name, "Bo");

    let limited = list_all(
        &store,
        &HistoryFilters {
            grade_level: None,
            limit: Some(2),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(limited.len(), 2);
}

#[test]
fn find_visit_returns_none_for_missing_id() {
    let store = memory_store();
    assert!(find_visit(&store, 7).unwrap().is_none());
}

#[test]
fn refresh_recomputes_labels_without_new_rows() {
    use std::time::Duration as StdDuration;
    use zenden::core::DurationRefresh;

    let mut store = memory_store();
    store
        .insert_visit(&new_visit("Alex R.", GradeLevel::G3, Emotion::Sad, local(2026, 10, 14, 9, 0)))
        .unwrap();
    let view = CurrentView::load(&store).unwrap();

    let mut labels = Vec::new();
    let ticks = DurationRefresh::new(StdDuration::ZERO, Some(3)).run(|tick| {
        let now = local(2026, 10, 14, 9, 0) + Duration::minutes(tick as i64);
        labels.push(view.cards(&now)[0].duration.clone());
    });

    assert_eq!(ticks, 3);
    assert_eq!(labels, ["1 minute", "2 minutes", "3 minutes"]);
}

#[test]
fn alex_scenario_labels_then_checkout_after_seventy_minutes() {
    let mut store = memory_store();
    let t0 = local(2026, 10, 14, 10, 0);
    let v = store
        .insert_visit(&new_visit("Alex R.", GradeLevel::G3, Emotion::Sad, t0))
        .unwrap();

    let view = CurrentView::load(&store).unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(view.cards(&t0)[0].duration, "Just arrived");
    assert_eq!(view.cards(&(t0 + Duration::minutes(15)))[0].duration, "15 minutes");
    assert_eq!(view.cards(&(t0 + Duration::minutes(65)))[0].duration, "1h 5m");

    let done = CheckOutLogic::apply(&mut store, v.id, t0 + Duration::minutes(70)).unwrap();
    assert!(!done.is_active());
    assert!(CurrentView::load(&store).unwrap().is_empty());

    let out = done.time_out.unwrap();
    assert_eq!(
        zenden::core::calculator::duration::duration_minutes(&done.time_in, &out),
        70
    );
}

#[test]
fn student_search_folds_accented_letters() {
    let mut store = memory_store();
    for name in ["Émile Zoë", "Emily"] {
        store
            .insert_visit(&new_visit(name, GradeLevel::G2, Emotion::Sad, local(2026, 10, 14, 9, 0)))
            .unwrap();
    }

    for needle in ["émile", "ÉMILE", "ZOË", "zoë"] {
        let found = list_all(
            &store,
            &HistoryFilters {
                student_name: Some(needle.to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        let names: Vec<&str> = found.iter().map(|v| v.student_name.as_str()).collect();
        assert_eq!(names, ["Émile Zoë"], "search for {needle:?}");
    }
}

#[test]
fn migrations_run_once_per_database() {
    let store = memory_store();
    zenden::db::initialize::init_db(&store.conn).unwrap();
    zenden::db::initialize::init_db(&store.conn).unwrap();

    let applied: i64 = store
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}
