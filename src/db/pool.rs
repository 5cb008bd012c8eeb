//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, ErrorCode};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file.
    ///
    /// An unopenable path is reported as `StorageUnavailable`.
    pub fn new(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path).map_err(|e| {
            AppError::StorageUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        Ok(Self { conn })
    }
}

/// Translate SQLite failures on an existing file into the matching storage error.
pub fn classify_open_error(path: &Path, err: rusqlite::Error) -> AppError {
    match err.sqlite_error_code() {
        Some(ErrorCode::NotADatabase) | Some(ErrorCode::DatabaseCorrupt) => {
            AppError::MalformedExistingFile {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }
        }
        Some(ErrorCode::CannotOpen)
        | Some(ErrorCode::PermissionDenied)
        | Some(ErrorCode::ReadOnly)
        | Some(ErrorCode::DiskFull) => {
            AppError::StorageUnavailable(format!("{}: {}", path.display(), err))
        }
        _ => AppError::Db(err),
    }
}
