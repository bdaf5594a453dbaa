use crate::cli::commands::{history_filters, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ExportLogic;
use crate::db::log::audit_quiet;
use crate::errors::{Action, AppResult};
use crate::export::default_file_name;
use crate::utils::date::today;
use crate::utils::path::output_path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filters,
        file,
        force,
    } = cmd
    {
        let filters = history_filters(filters, None)?;
        let path = output_path(file.as_deref(), &default_file_name(today()));

        let pool = open_store(&cfg.database, Action::Export)?;
        let rows = ExportLogic::export(&pool, &filters, &path, *force)
            .map_err(|e| e.collapse(Action::Export))?;

        audit_quiet(
            &pool.conn,
            "export",
            &path.display().to_string(),
            &format!("Exported {} visits to CSV", rows),
        );
    }

    Ok(())
}
