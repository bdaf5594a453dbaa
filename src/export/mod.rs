// src/export/mod.rs

pub mod csv_export;
pub(crate) mod fs_utils;
mod model;

pub use csv_export::build_csv;
pub use model::VisitExport;

use crate::ui::messages::success;
use chrono::NaiveDate;
use std::path::Path;

/// Default download name, e.g. `zen-den-visits-2026-10-16.csv`.
pub fn default_file_name(today: NaiveDate) -> String {
    format!("zen-den-visits-{}.csv", today.format("%Y-%m-%d"))
}

pub(crate) fn notify_export_success(count: usize, path: &Path) {
    success(format!(
        "CSV export completed: {} ({} rows)",
        path.display(),
        count
    ));
}
