#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;
use zenden::db::DbPool;
use zenden::db::initialize::init_db;
use zenden::models::{Emotion, GradeLevel, NewVisit};

pub fn zen() -> Command {
    cargo_bin_cmd!("zenden")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_zenden.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh fake HOME so config and recent staff files stay out of the real one
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_zenden_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// In-memory store with the current schema
pub fn memory_store() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("migrate in-memory db");
    pool
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .earliest()
        .expect("valid local time")
}

pub fn new_visit(
    student: &str,
    grade: GradeLevel,
    emotion: Emotion,
    time_in: DateTime<Local>,
) -> NewVisit {
    NewVisit {
        student_name: student.to_string(),
        grade_level: grade,
        staff_name: "Ms. Lopez".to_string(),
        date: time_in.date_naive(),
        time_in,
        reason: "Needed a break".to_string(),
        emotion,
    }
}
