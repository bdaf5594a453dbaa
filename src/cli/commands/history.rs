use crate::cli::commands::{history_filters, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::duration_minutes;
use crate::core::visits::list_all;
use crate::errors::{Action, AppResult};
use crate::models::Visit;
use crate::ui::messages::info;
use crate::utils::date::format_date_short;
use crate::utils::formatting::plural;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time_12h;

fn history_row(v: &Visit) -> Vec<String> {
    let (time_out, duration) = match &v.time_out {
        Some(out) => (
            format_time_12h(out),
            format!("{} min", duration_minutes(&v.time_in, out)),
        ),
        None => ("Still here".to_string(), "Still here".to_string()),
    };

    vec![
        format_date_short(v.date),
        v.student_name.clone(),
        v.grade_level.label().to_string(),
        v.staff_name.clone(),
        format_time_12h(&v.time_in),
        time_out,
        duration,
        v.emotion.label().to_string(),
        v.reason.clone(),
    ]
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { filters, limit } = cmd {
        let filters = history_filters(filters, *limit)?;

        let pool = open_store(&cfg.database, Action::LoadHistory)?;
        let visits = list_all(&pool, &filters).map_err(|e| e.collapse(Action::LoadHistory))?;

        if visits.is_empty() {
            info("No visits found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 12),
            Column::new("Student", 22),
            Column::new("Grade", 5),
            Column::new("Staff", 16),
            Column::new("Time In", 8),
            Column::new("Time Out", 10),
            Column::new("Duration", 10),
            Column::new("Emotion", 15),
            Column::new("Reason", 40),
        ]);
        for v in &visits {
            table.add_row(history_row(v));
        }

        print!("{}", table.render());
        println!("\nShowing {}", plural(visits.len(), "visit"));
    }

    Ok(())
}
