use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// An existing output file is only replaced with `force` or after the user
/// agrees.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    if confirm(format!("'{}' already exists. Overwrite it?", path.display())) {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::OperationFailed(format!(
        "Export cancelled: '{}' was left untouched.",
        path.display()
    )))
}
