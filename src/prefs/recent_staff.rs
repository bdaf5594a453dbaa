//! Recently used staff names, most recent first.
//!
//! Persisted as a JSON array in a single file. A missing or unreadable file
//! reads as an empty list.

use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

pub const MAX_RECENT_STAFF: usize = 10;

#[derive(Debug, Clone)]
pub struct RecentStaff {
    path: PathBuf,
    names: Vec<String>,
}

impl RecentStaff {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let names = fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str::<Vec<String>>(&s).ok())
            .unwrap_or_default();

        let mut list = Self {
            path,
            names: Vec::new(),
        };
        // Re-apply the invariants in case the file was edited by hand
        for name in names.into_iter().rev() {
            list.push_front(&name);
        }
        list
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    fn push_front(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let lower = name.to_lowercase();
        self.names.retain(|n| n.to_lowercase() != lower);
        self.names.insert(0, name.to_string());
        self.names.truncate(MAX_RECENT_STAFF);
    }

    /// Move `name` to the front (dropping any case-insensitive duplicate),
    /// keep at most [`MAX_RECENT_STAFF`] entries and save.
    pub fn remember(&mut self, name: &str) -> AppResult<()> {
        self.push_front(name);
        self.save()
    }

    pub fn clear(&mut self) -> AppResult<()> {
        self.names.clear();
        self.save()
    }

    fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(&self.names)?)?;
        Ok(())
    }
}
