use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::migrate::run_pending_migrations;
use crate::db::{DbPool, stats};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

/// Print a "▶ label…" line, run `step`, then report completion.
fn run_step<F>(label: &str, pool: &mut DbPool, step: F) -> AppResult<()>
where
    F: FnOnce(&mut DbPool) -> AppResult<()>,
{
    println!("{CYAN}▶ {label}…{RESET}");
    step(pool)?;
    println!("{GREEN}✔ {label} done.{RESET}\n");
    Ok(())
}

fn integrity_check(pool: &mut DbPool) -> AppResult<()> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if result != "ok" {
        println!("{RED}✘ Integrity check failed:{RESET} {result}");
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *info) {
        return Ok(());
    }

    // Opening already brings the schema up to date
    let mut pool = open_db(&cfg.database)?;

    if *migrate {
        run_step("Migrations", &mut pool, |p| {
            Ok(run_pending_migrations(&p.conn)?)
        })?;
    }
    if *info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }
    if *check {
        run_step("Integrity check", &mut pool, integrity_check)?;
    }
    if *vacuum {
        run_step("Vacuum", &mut pool, |p| Ok(p.conn.execute_batch("VACUUM;")?))?;
    }

    Ok(())
}
