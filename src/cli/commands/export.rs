use super::configured_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = configured_store(cfg)?;
        match ExportLogic::export(store.as_ref(), *format, &expand_tilde(file), *force) {
            Ok(_) => {}
            // Declining the overwrite prompt is not a failure.
            Err(AppError::ExportCancelled) => info("Export cancelled."),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
