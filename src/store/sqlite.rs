use super::{Backend, SessionStore, check_data_dir, prepare_data_dir};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::{DbPool, classify_open_error};
use crate::db::queries::{insert_session, load_sessions};
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionRecord;
use std::path::{Path, PathBuf};

/// Sessions in the `work_time` table of `work_time.db`.
pub struct SqliteStore {
    pool: DbPool,
    path: PathBuf,
}

impl SqliteStore {
    pub fn open(dir: &Path) -> AppResult<Self> {
        check_data_dir(dir)?;
        Self::open_file(&Backend::Sqlite.file_in(dir))
    }

    /// Open a database file directly, creating the schema if needed.
    pub fn open_file(path: &Path) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn, path)?;
        Ok(Self {
            pool,
            path: path.to_path_buf(),
        })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl SessionStore for SqliteStore {
    fn append(&mut self, record: &SessionRecord) -> AppResult<()> {
        match insert_session(&self.pool.conn, record) {
            Ok(_) => Ok(()),
            Err(AppError::Db(err)) => Err(classify_open_error(&self.path, err)),
            Err(other) => Err(other),
        }
    }

    fn list_all(&self) -> AppResult<Vec<SessionRecord>> {
        match load_sessions(&self.pool.conn) {
            Ok(records) => Ok(records),
            // A row whose text columns do not parse.
            Err(AppError::Db(err @ rusqlite::Error::FromSqlConversionFailure(..))) => {
                Err(AppError::MalformedExistingFile {
                    path: self.path.clone(),
                    reason: err.to_string(),
                })
            }
            Err(AppError::Db(err)) => Err(classify_open_error(&self.path, err)),
            Err(other) => Err(other),
        }
    }

    fn relocate(&mut self, dir: &Path) -> AppResult<()> {
        // Open the new file first: on failure the current location stays in use.
        prepare_data_dir(dir)?;
        let next = SqliteStore::open(dir)?;
        *self = next;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }

    fn backend(&self) -> Backend {
        Backend::Sqlite
    }

    fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }
}
