use super::configured_store;
use crate::config::Config;
use crate::core::summary::render_sessions;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print every stored session in insertion order.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = configured_store(cfg)?;
    let records = store.list_all()?;

    if records.is_empty() {
        info("No sessions recorded yet.");
        return Ok(());
    }

    print!("{}", render_sessions(&records));
    Ok(())
}
