//! Durable storage for closed sessions.
//!
//! Two interchangeable backends sit behind [`SessionStore`]: a SQLite table
//! (the default) and a JSON document grouped by day. The backend is picked
//! by configuration, never by the timer.

pub mod json;
pub mod sqlite;

use crate::core::summary::aggregate;
use crate::errors::{AppError, AppResult};
use crate::models::daily_total::DailyTotal;
use crate::models::session::SessionRecord;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use json::JsonStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Json,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Json => "json",
        }
    }

    /// File name of the store inside its data folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            Backend::Sqlite => "work_time.db",
            Backend::Json => "work_time.json",
        }
    }

    pub fn file_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

pub trait SessionStore {
    /// Durably add one closed session.
    fn append(&mut self, record: &SessionRecord) -> AppResult<()>;

    /// Every stored session, in insertion order. The JSON document groups
    /// by day, so there the order is per day first, insertion order within it.
    fn list_all(&self) -> AppResult<Vec<SessionRecord>>;

    /// Per-day session count and total, most recent day first.
    fn aggregate_by_date(&self) -> AppResult<Vec<DailyTotal>> {
        Ok(aggregate(&self.list_all()?))
    }

    /// Switch to the store file inside `dir`, creating the folder and the
    /// file if absent. On failure the current location stays in use.
    /// Records already stored at the old location stay there.
    fn relocate(&mut self, dir: &Path) -> AppResult<()>;

    /// Path of the backing file.
    fn location(&self) -> &Path;

    fn backend(&self) -> Backend;

    /// Append a line to the store's internal operations log, if it keeps one.
    fn log(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Open the store of the given kind inside `dir`.
pub fn open_store(backend: Backend, dir: &Path) -> AppResult<Box<dyn SessionStore>> {
    Ok(match backend {
        Backend::Sqlite => Box::new(SqliteStore::open(dir)?),
        Backend::Json => Box::new(JsonStore::open(dir)?),
    })
}

/// Create a relocation target folder if needed, then check it like any data folder.
pub(crate) fn prepare_data_dir(dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        AppError::StorageUnavailable(format!("cannot create {}: {}", dir.display(), e))
    })?;
    check_data_dir(dir)
}

/// The data folder must already exist and be a directory.
pub(crate) fn check_data_dir(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        return Err(AppError::StorageUnavailable(format!(
            "data folder does not exist: {}",
            dir.display()
        )));
    }
    if !dir.is_dir() {
        return Err(AppError::StorageUnavailable(format!(
            "not a folder: {}",
            dir.display()
        )));
    }
    Ok(())
}
