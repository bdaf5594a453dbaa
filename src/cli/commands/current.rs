use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{CurrentView, DurationRefresh};
use crate::errors::{Action, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_elapsed};
use crate::utils::formatting::{pad_right, truncate};
use chrono::Local;
use std::time::Duration;

fn render(view: &CurrentView) {
    let now = Local::now();
    header(format!("Currently here ({})", view.len()));

    if view.is_empty() {
        info("No students are currently checked in.");
        return;
    }

    println!(
        "{} {} {} {} Duration",
        pad_right("ID", 6),
        pad_right("Student", 24),
        pad_right("Grade", 6),
        pad_right("Checked in", 11)
    );
    for card in view.cards(&now) {
        println!(
            "{} {} {} {} {}{}{}",
            pad_right(&format!("#{}", card.visit_id), 6),
            pad_right(&truncate(&card.student_name, 24), 24),
            pad_right(card.grade_level.label(), 6),
            pad_right(&card.checked_in, 11),
            color_for_elapsed(card.elapsed_minutes),
            card.duration,
            RESET
        );
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Current {
        watch,
        ticks,
        interval,
    } = cmd
    {
        let pool = open_store(&cfg.database, Action::LoadActive)?;
        let view = CurrentView::load(&pool).map_err(|e| e.collapse(Action::LoadActive))?;

        render(&view);

        if *watch {
            let secs = interval.unwrap_or(cfg.refresh_interval_secs);
            info(format!(
                "Refreshing durations every {}s (Ctrl+C to stop).",
                secs
            ));
            DurationRefresh::new(Duration::from_secs(secs), *ticks).run(|_| render(&view));
        }
    }

    Ok(())
}
