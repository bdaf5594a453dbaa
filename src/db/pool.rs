//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, Result};
use std::path::Path;

/// SQL name of the Unicode-aware, case-insensitive "contains" predicate.
pub const CONTAINS_FN: &str = "zen_contains";

pub struct DbPool {
    pub conn: Connection,
}

/// `zen_contains(haystack, needle)`: case-insensitive substring match with
/// full Unicode case folding (SQLite `LIKE` only folds ASCII).
fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        CONTAINS_FN,
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let haystack: String = ctx.get(0)?;
            let needle: String = ctx.get(1)?;
            Ok(haystack.to_lowercase().contains(&needle.to_lowercase()))
        },
    )
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        register_functions(&conn)?;
        Ok(Self { conn })
    }

    /// Private in-memory database, used by tests and dry runs.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        register_functions(&conn)?;
        Ok(Self { conn })
    }
}
