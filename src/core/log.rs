use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::utils::formatting::truncate;
use ansi_term::Colour;

/// ANSI color of each audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "checkout" => Colour::Yellow,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for (id, raw_date, operation, target, message) in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            // Pad before painting so ANSI codes do not skew the column
            let op = format!("{:<18}", truncate(&operation, 18));
            let target = if target.is_empty() {
                String::new()
            } else {
                format!(" ({})", truncate(&target, 40))
            };

            println!(
                "{:>id_w$}: {:<19} | {}{} => {}",
                id,
                date,
                color_for_operation(&operation).paint(op),
                target,
                message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
