use super::configured_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = configured_store(cfg)?;
        match BackupLogic::backup(store.as_ref(), &expand_tilde(file), *compress, *force) {
            Ok(_) => {}
            Err(AppError::ExportCancelled) => info("Backup cancelled."),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
