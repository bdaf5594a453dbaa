use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::visits::count_active;
use crate::core::{CheckInForm, CheckInLogic};
use crate::db::log::audit_quiet;
use crate::errors::{Action, AppResult};
use crate::prefs::RecentStaff;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use crate::utils::time::{format_time_12h, format_time_input};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        student,
        grade,
        staff,
        date,
        time,
        reason,
        emotion,
    } = cmd
    {
        let mut recent = RecentStaff::load(expand_tilde(&cfg.recent_staff_file));

        let staff_name = match staff {
            Some(s) => s.clone(),
            None => match recent.most_recent() {
                Some(name) => {
                    info(format!("Using most recent staff name: {}", name));
                    name.to_string()
                }
                None => String::new(),
            },
        };

        let now = Local::now();
        let form = CheckInForm {
            student_name: student.clone(),
            grade_level: grade.clone(),
            staff_name,
            date: date
                .clone()
                .unwrap_or_else(|| now.format("%Y-%m-%d").to_string()),
            time_in: time.clone().unwrap_or_else(|| format_time_input(&now)),
            reason: reason.clone(),
            emotion: emotion.clone().unwrap_or_default(),
        };

        // Input problems are reported before the database is opened
        form.validate()?;

        let mut pool = open_store(&cfg.database, Action::CheckIn)?;
        let visit = CheckInLogic::apply(&mut pool, &mut recent, &form)
            .map_err(|e| e.collapse(Action::CheckIn))?;

        audit_quiet(
            &pool.conn,
            "checkin",
            &format!("visit #{}", visit.id),
            &format!(
                "{} (grade {}) checked in by {}",
                visit.student_name, visit.grade_level, visit.staff_name
            ),
        );

        success(format!(
            "{} checked in at {} (visit #{}).",
            visit.student_name,
            format_time_12h(&visit.time_in),
            visit.id
        ));

        match count_active(&pool) {
            Ok(n) => info(format!("Currently here: {}", n)),
            Err(e) => tracing::warn!(error = %e, "failed to load active visits count"),
        }
    }

    Ok(())
}
