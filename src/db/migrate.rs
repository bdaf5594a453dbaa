use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `visits` table exists.
fn visits_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='visits'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `visits` table with the current schema.
fn create_visits_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS visits (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            student_name  TEXT NOT NULL,
            grade_level   TEXT NOT NULL CHECK(grade_level IN ('K','1','2','3','4','5','6','7','8')),
            staff_name    TEXT NOT NULL,
            date          TEXT NOT NULL,
            time_in       TEXT NOT NULL,
            time_out      TEXT,
            reason        TEXT NOT NULL,
            emotion       TEXT NOT NULL CHECK(emotion IN ('Angry','Sad','Anxious/Worried','Frustrated','Overwhelmed','Tired','Other')),
            created_at    TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_visits_date_time_in ON visits(date, time_in);
        CREATE INDEX IF NOT EXISTS idx_visits_time_out ON visits(time_out);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Index used by the history search on student names.
fn migrate_add_student_index(conn: &Connection) -> Result<()> {
    let version = "20260301_0001_add_student_index";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_visits_student ON visits(student_name, grade_level);",
    )?;

    mark_applied(conn, version, "Added student/grade index to visits")?;
    tracing::debug!(version, "migration applied");

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create visits on first run
    if !visits_table_exists(conn)? {
        create_visits_table(conn)?;
        success("Created visits table.");
    }

    // 3) Versioned migrations
    migrate_add_student_index(conn)?;

    Ok(())
}
