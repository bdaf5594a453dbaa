use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{DashboardLogic, DashboardStats, FrequentPolicy};
use crate::errors::{Action, AppResult};
use crate::models::{DateWindow, Emotion, GradeLevel};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RESET};
use crate::utils::date::parse_optional_date;
use crate::utils::formatting::{bar, bold, pad_right};
use chrono::Local;

const BAR_WIDTH: usize = 30;

fn render_breakdown(title: &str, rows: &[(String, i64)]) {
    println!("{}", bold(title));
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);
    for (label, value) in rows {
        println!(
            "  {} {}{}{} {}",
            pad_right(label, 22),
            CYAN,
            bar(*value, max, BAR_WIDTH),
            RESET,
            value
        );
    }
    println!();
}

fn render(stats: &DashboardStats, policy: FrequentPolicy) {
    header("Dashboard");

    println!(
        "  Today: {GREEN}{}{RESET}   This week: {GREEN}{}{RESET}   This month: {GREEN}{}{RESET}\n",
        stats.today_count, stats.week_count, stats.month_count
    );

    let grades: Vec<(String, i64)> = GradeLevel::ALL
        .iter()
        .map(|g| (g.display_name(), stats.grade_breakdown[g]))
        .collect();
    render_breakdown("Visits by grade", &grades);

    let emotions: Vec<(String, i64)> = Emotion::ALL
        .iter()
        .map(|e| (e.label().to_string(), stats.emotion_breakdown[e]))
        .collect();
    render_breakdown("Visits by emotion", &emotions);

    render_breakdown(
        "Visits by time of day",
        &[
            (
                "Morning (before 12pm)".to_string(),
                stats.time_of_day_breakdown.morning,
            ),
            (
                "Afternoon (12pm+)".to_string(),
                stats.time_of_day_breakdown.afternoon,
            ),
        ],
    );

    println!("{}", bold("Frequent visitors"));
    if stats.frequent_visitors.is_empty() {
        println!(
            "  No frequent visitors in the past {} days.",
            policy.days
        );
        return;
    }
    for (i, v) in stats.frequent_visitors.iter().enumerate() {
        println!(
            "  {:>2}. {} Grade {:<2} {} visits",
            i + 1,
            pad_right(&v.student_name, 24),
            v.grade_level.label(),
            v.visit_count
        );
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { from, to } = cmd {
        let window = DateWindow::new(
            parse_optional_date(from.as_ref())?,
            parse_optional_date(to.as_ref())?,
        );
        let policy = FrequentPolicy {
            days: cfg.frequent_days,
            min_visits: cfg.frequent_min_visits,
        };

        let pool = open_store(&cfg.database, Action::LoadDashboard)?;
        let stats = DashboardLogic::stats(&pool, &window, &Local::now(), policy);

        render(&stats, policy);
    }

    Ok(())
}
