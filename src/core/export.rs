use crate::core::visits::list_all;
use crate::db::VisitStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{build_csv, notify_export_success};
use crate::models::HistoryFilters;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// High-level logic of the CSV export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every visit matching the history filters (the row limit of
    /// the history view does not apply) to `path`.
    ///
    /// Returns the number of exported rows. Nothing is written when no
    /// visit matches.
    pub fn export<S: VisitStore + ?Sized>(
        store: &S,
        filters: &HistoryFilters,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        let filters = HistoryFilters {
            limit: None,
            ..filters.clone()
        };
        let visits = list_all(store, &filters)?;

        if visits.is_empty() {
            return Err(AppError::NothingToExport);
        }

        let csv = build_csv(&visits)?;

        ensure_writable(path, force)?;
        info(format!("Exporting to CSV: {}", path.display()));
        fs::write(path, csv)?;

        notify_export_success(visits.len(), path);
        Ok(visits.len())
    }
}
