//! Path utilities: expand ~, pick output files.

use std::path::PathBuf;

/// `~/x` → `$HOME/x`; anything else is returned as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// The user-chosen output file, or `default_name` in the working directory.
pub fn output_path(file: Option<&str>, default_name: &str) -> PathBuf {
    file.map(expand_tilde)
        .unwrap_or_else(|| PathBuf::from(default_name))
}
