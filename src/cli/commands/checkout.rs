use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::CheckOutLogic;
use crate::core::calculator::duration::duration_minutes;
use crate::core::visits::find_visit;
use crate::db::log::audit_quiet;
use crate::errors::{Action, AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::utils::time::{combine_date_time, format_time_12h, parse_time};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkout { id, at, yes } = cmd {
        let at_time = at
            .as_ref()
            .map(|s| parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone())))
            .transpose()?;

        let mut pool = open_store(&cfg.database, Action::CheckOut)?;

        // The pending checkout target only lives for this confirmation
        let pending = find_visit(&pool, *id)
            .and_then(|v| v.ok_or(AppError::VisitNotFound(*id)))
            .map_err(|e| e.collapse(Action::CheckOut))?;

        if !*yes
            && !confirm(format!(
                "Check out {} (visit #{})?",
                pending.student_name, pending.id
            ))
        {
            info("Checkout cancelled.");
            return Ok(());
        }

        // --at is a time on the visit's own day
        let time_out = match at_time {
            Some(t) => combine_date_time(pending.date, t)?,
            None => Local::now(),
        };

        let visit = CheckOutLogic::apply(&mut pool, *id, time_out)
            .map_err(|e| e.collapse(Action::CheckOut))?;

        let minutes = visit
            .time_out
            .as_ref()
            .map(|out| duration_minutes(&visit.time_in, out))
            .unwrap_or(0);

        audit_quiet(
            &pool.conn,
            "checkout",
            &format!("visit #{}", visit.id),
            &format!("{} checked out after {} min", visit.student_name, minutes),
        );

        success(format!(
            "{} checked out at {} ({} min).",
            visit.student_name,
            format_time_12h(&time_out),
            minutes
        ));
    }

    Ok(())
}
