use crate::db::migrate::run_pending_migrations;
use crate::db::pool::classify_open_error;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection, path: &Path) -> AppResult<()> {
    // SQLite opens files lazily: a non-database file only fails on first use.
    run_pending_migrations(conn).map_err(|e| classify_open_error(path, e))?;
    Ok(())
}
