use chrono::Duration;
use std::fs;
use zenden::core::ExportLogic;
use zenden::db::VisitStore;
use zenden::errors::AppError;
use zenden::export::{build_csv, default_file_name};
use zenden::models::{Emotion, GradeLevel, HistoryFilters};

mod common;
use common::{day, local, memory_store, new_visit, temp_out};

#[test]
fn default_name_uses_today() {
    assert_eq!(
        default_file_name(day(2026, 10, 16)),
        "zen-den-visits-2026-10-16.csv"
    );
}

#[test]
fn csv_quotes_fields_and_survives_embedded_quotes() {
    let mut store = memory_store();
    let mut nv = new_visit("Alex R.", GradeLevel::G3, Emotion::AnxiousWorried, local(2026, 10, 14, 9, 5));
    nv.reason = "He said \"stop\", then left".to_string();
    let v = store.insert_visit(&nv).unwrap();
    let v = store
        .update_time_out(v.id, v.time_in + Duration::minutes(25))
        .unwrap()
        .unwrap();

    let text = build_csv(&[v]).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Date,Student Name,Grade,Staff Name,Time In,Time Out,Duration (minutes),Emotion,Reason")
    );
    assert!(text.contains("\"He said \"\"stop\"\", then left\""));
    assert!(text.ends_with('\n'));

    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let rows: Vec<csv::StringRecord> = rdr.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "2026-10-14");
    assert_eq!(&rows[0][1], "Alex R.");
    assert_eq!(&rows[0][2], "3");
    assert_eq!(&rows[0][4], "9:05 AM");
    assert_eq!(&rows[0][5], "9:30 AM");
    assert_eq!(&rows[0][6], "25");
    assert_eq!(&rows[0][7], "Anxious/Worried");
    assert_eq!(&rows[0][8], "He said \"stop\", then left");
}

#[test]
fn active_visit_has_blank_time_out_and_duration() {
    let mut store = memory_store();
    let v = store
        .insert_visit(&new_visit("Bo", GradeLevel::K, Emotion::Tired, local(2026, 10, 14, 13, 0)))
        .unwrap();

    let text = build_csv(&[v]).unwrap();
    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let row = rdr.records().next().unwrap().unwrap();
    assert_eq!(&row[2], "K");
    assert_eq!(&row[5], "");
    assert_eq!(&row[6], "");
}

#[test]
fn export_writes_filtered_rows_ignoring_limit() {
    let mut store = memory_store();
    for (name, grade) in [("A", GradeLevel::G1), ("B", GradeLevel::G1), ("C", GradeLevel::G2)] {
        store
            .insert_visit(&new_visit(name, grade, Emotion::Sad, local(2026, 10, 14, 10, 0)))
            .unwrap();
    }
    let path = temp_out("export_filtered", "csv");
    let filters = HistoryFilters {
        grade_level: Some(GradeLevel::G1),
        limit: Some(1),
        ..Default::default()
    };

    let n = ExportLogic::export(&store, &filters, &path, true).unwrap();
    assert_eq!(n, 2);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn export_with_no_rows_writes_nothing() {
    let store = memory_store();
    let path = temp_out("export_empty", "csv");

    let err = ExportLogic::export(&store, &HistoryFilters::default(), &path, true).unwrap_err();
    assert!(matches!(err, AppError::NothingToExport));
    assert_eq!(err.to_string(), "No data to export.");
    assert!(!path.exists());
}
