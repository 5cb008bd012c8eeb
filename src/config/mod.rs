use crate::errors::{AppError, AppResult};
use crate::store::Backend;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod migrate;

/// Default reminder: one hour of continuous work.
pub const DEFAULT_REMINDER_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding the store file.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub backend: Backend,
    /// Seconds of continuous running between reminders; 0 disables them.
    #[serde(default = "default_reminder_interval")]
    pub reminder_interval: u64,
}

fn default_data_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}

fn default_reminder_interval() -> u64 {
    DEFAULT_REMINDER_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backend: Backend::default(),
            reminder_interval: default_reminder_interval(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worktimer")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worktimer")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktimer.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| AppError::ConfigSave(format!("{}: {}", dir.display(), e)))?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)
            .map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))
    }

    /// Data folder with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Full path of the store file for the configured backend.
    pub fn store_file(&self) -> PathBuf {
        self.backend.file_in(&self.data_path())
    }

    pub fn reminder(&self) -> Option<Duration> {
        (self.reminder_interval > 0).then(|| Duration::from_secs(self.reminder_interval))
    }

    /// Create the config directory, the data folder and (unless `is_test`)
    /// the config file. Returns the configuration that was set up.
    pub fn init_all(
        data_dir: Option<String>,
        backend: Option<Backend>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load().unwrap_or_default()
        };

        if let Some(d) = data_dir {
            config.data_dir = d;
        }
        if let Some(b) = backend {
            config.backend = b;
        }

        // The data folder is created here, and only here.
        fs::create_dir_all(config.data_path())?;

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("none.conf")).unwrap();
        assert_eq!(cfg.backend, Backend::Sqlite);
        assert_eq!(cfg.reminder_interval, 3600);
        assert_eq!(cfg.reminder(), Some(Duration::from_secs(3600)));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("worktimer.conf");
        fs::write(&path, "backend: json\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.backend, Backend::Json);
        assert_eq!(cfg.reminder_interval, DEFAULT_REMINDER_SECS);
    }

    #[test]
    fn round_trips_through_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sub/worktimer.conf");
        let cfg = Config {
            data_dir: "/srv/timer".into(),
            backend: Backend::Json,
            reminder_interval: 0,
        };

        cfg.save_to(&path).unwrap();
        let back = Config::load_from(&path).unwrap();

        assert_eq!(back, cfg);
        assert_eq!(back.reminder(), None);
        assert_eq!(back.store_file(), PathBuf::from("/srv/timer/work_time.json"));
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("worktimer.conf");
        fs::write(&path, "backend: [unterminated\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::ConfigLoad(_))
        ));
    }
}
