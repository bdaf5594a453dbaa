use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};

/// Handle the `init` command: config directory and file (the file is skipped
/// with `--test`), then the database with every migration applied.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    header("Setting up the Zen Den tracker");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let pool = open_db(&cfg.database)?;
    audit_quiet(
        &pool.conn,
        "init",
        &cfg.database,
        "Database initialized",
    );

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
