//! Unified application error type.
//! All modules (db, core, prefs, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid row in visits table: {0}")]
    InvalidRow(String),

    // ---------------------------
    // Validation (raised before any store call)
    // ---------------------------
    #[error("Please select how the student is feeling.")]
    MissingEmotion,

    #[error("Invalid emotion: {0}")]
    InvalidEmotion(String),

    #[error("Invalid grade level: {0} (use K or 1-8)")]
    InvalidGrade(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Lifecycle errors
    // ---------------------------
    #[error("No visit found with id {0}")]
    VisitNotFound(i64),

    /// Generic, user-facing failure of one user action. The underlying
    /// cause has already been logged.
    #[error("{0}")]
    OperationFailed(String),

    // ---------------------------
    // Config / preferences
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Preference store error: {0}")]
    Prefs(#[from] serde_json::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("No data to export.")]
    NothingToExport,

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// User actions whose store failures are reported with one fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CheckIn,
    CheckOut,
    LoadActive,
    LoadHistory,
    LoadDashboard,
    Export,
}

impl Action {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::CheckIn => "Failed to check in student. Please try again.",
            Action::CheckOut => "Failed to check out student. Please try again.",
            Action::LoadActive => "Failed to load active visits.",
            Action::LoadHistory => "Failed to load visit history.",
            Action::LoadDashboard => "Failed to load dashboard. Please try again.",
            Action::Export => "Failed to export visits. Please try again.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CheckIn => "checkin",
            Action::CheckOut => "checkout",
            Action::LoadActive => "current",
            Action::LoadHistory => "history",
            Action::LoadDashboard => "dashboard",
            Action::Export => "export",
        }
    }
}

impl AppError {
    /// True for errors detected from user input before touching the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingEmotion
                | AppError::InvalidEmotion(_)
                | AppError::InvalidGrade(_)
                | AppError::MissingField(_)
                | AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
        )
    }

    /// Collapse a failure of `action` into its generic message.
    ///
    /// Validation errors and errors that already carry a user-facing meaning
    /// (`NothingToExport`, `OperationFailed`) pass through unchanged; every
    /// other cause is logged and replaced.
    pub fn collapse(self, action: Action) -> AppError {
        if self.is_validation()
            || matches!(
                self,
                AppError::NothingToExport | AppError::OperationFailed(_)
            )
        {
            return self;
        }

        tracing::error!(action = action.as_str(), error = %self, "operation failed");
        AppError::OperationFailed(action.failure_message().to_string())
    }
}
