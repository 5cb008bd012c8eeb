use super::configured_store;
use crate::config::Config;
use crate::core::summary::render_totals;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print sessions count and total per day, most recent first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = configured_store(cfg)?;
    let totals = store.aggregate_by_date()?;

    if totals.is_empty() {
        info("No sessions recorded yet.");
        return Ok(());
    }

    print!("{}", render_totals(&totals));
    Ok(())
}
