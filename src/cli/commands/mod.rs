pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod relocate;
pub mod run;
pub mod summary;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{Backend, SessionStore, SqliteStore, open_store};

/// Open the store the configuration points at.
pub(crate) fn configured_store(cfg: &Config) -> AppResult<Box<dyn SessionStore>> {
    open_store(cfg.backend, &cfg.data_path())
}

/// Database maintenance only makes sense for the sqlite backend.
pub(crate) fn configured_db(cfg: &Config, what: &str) -> AppResult<SqliteStore> {
    if cfg.backend != Backend::Sqlite {
        return Err(AppError::Config(format!(
            "`{}` needs the sqlite backend (configured: {})",
            what,
            cfg.backend.as_str()
        )));
    }

    SqliteStore::open(&cfg.data_path())
}
