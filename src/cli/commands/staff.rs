use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::prefs::RecentStaff;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Staff { clear } = cmd {
        let mut recent = RecentStaff::load(expand_tilde(&cfg.recent_staff_file));

        if *clear {
            recent.clear()?;
            success("Recent staff names cleared.");
            return Ok(());
        }

        if recent.names().is_empty() {
            info("No recent staff names yet.");
            return Ok(());
        }

        println!("👥 Recent staff:");
        for name in recent.names() {
            println!("  - {}", name);
        }
    }

    Ok(())
}
