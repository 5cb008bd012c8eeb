use super::configured_store;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{open_store, prepare_data_dir};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::bold;
use crate::utils::path::expand_tilde;
use crate::utils::shorten_path;

/// Handle the `relocate` command
///
/// New sessions go to the store inside the target folder. Sessions already
/// recorded stay at the old location.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Relocate { dir } = &cli.command else {
        return Ok(());
    };
    let target = expand_tilde(dir);

    // 1️⃣ Open the current store; if it is gone, start directly at the target.
    let mut store = match configured_store(cfg) {
        Ok(s) => s,
        Err(e) => {
            warning(format!("Current store not usable ({}), skipping it.", e));
            prepare_data_dir(&target)?;
            open_store(cfg.backend, &target)?
        }
    };

    // 2️⃣ Switch. On failure the configuration is left untouched.
    store.relocate(&target)?;

    if let Err(e) = store.log(
        "relocate",
        &store.location().display().to_string(),
        "Store relocated",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    // 3️⃣ Remember the new folder. Per-run overrides stay out of the file.
    let mut updated = Config::load()?;
    updated.data_dir = target
        .canonicalize()
        .unwrap_or_else(|_| target.clone())
        .display()
        .to_string();
    if !cli.test {
        updated.save()?;
    }

    success(format!(
        "Store relocated to {}",
        bold(&shorten_path(&store.location().display().to_string()))
    ));
    Ok(())
}
