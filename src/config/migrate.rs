//! Bring an older or hand-edited config file up to the current set of keys.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file should carry.
pub const KNOWN_KEYS: [&str; 3] = ["data_dir", "backend", "reminder_interval"];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::ConfigLoad(format!(
            "{}: top level is not a mapping",
            path.display()
        ))),
    }
}

/// Keys missing from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .into_iter()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add missing keys with their default values. Existing values, including
/// keys this version does not know, are preserved.
///
/// Returns the keys that were added.
pub fn migrate_config(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in KNOWN_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(key);
        }
    }

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, yaml)
            .map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))?;
    }

    Ok(added)
}
