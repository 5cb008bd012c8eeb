use super::{Backend, SessionStore, check_data_dir, prepare_data_dir};
use crate::errors::{AppError, AppResult};
use crate::models::duration::WorkDuration;
use crate::models::session::SessionRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// One day of the JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct DayEntry {
    date: String,
    sessions: Vec<SessionEntry>,
    total_duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct SessionEntry {
    start: String,
    end: String,
    duration: String,
}

/// Sessions grouped by day in `work_time.json`:
///
/// ```json
/// [
///   {
///     "date": "19.10.2026",
///     "sessions": [{ "start": "09:00:00", "end": "09:05:20", "duration": "00:00:50" }],
///     "totalDuration": "00:00:50"
///   }
/// ]
/// ```
///
/// The file is re-read on every call. A file that does not parse is reported
/// and never overwritten.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn open(dir: &Path) -> AppResult<Self> {
        check_data_dir(dir)?;
        Self::open_file(&Backend::Json.file_in(dir))
    }

    /// Open a document directly, creating an empty one if absent.
    pub fn open_file(path: &Path) -> AppResult<Self> {
        let store = Self {
            path: path.to_path_buf(),
        };

        if path.exists() {
            store.load()?;
        } else {
            store.save(&[])?;
        }

        Ok(store)
    }

    fn load(&self) -> AppResult<Vec<DayEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::StorageUnavailable(format!(
                    "store file disappeared: {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        // A zero-byte file is what an interrupted first write leaves behind.
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let days: Vec<DayEntry> =
            serde_json::from_str(&content).map_err(|e| self.malformed(e.to_string()))?;

        // Every entry must also be readable as a session record.
        for day in &days {
            for s in &day.sessions {
                SessionRecord::from_labels(&day.date, &s.start, &s.end, &s.duration)
                    .map_err(|e| self.malformed(e.to_string()))?;
            }
        }

        Ok(days)
    }

    /// Write through a temporary sibling, then rename over the target.
    fn save(&self, days: &[DayEntry]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(days)?;
        let tmp = self.path.with_extension("json.tmp");

        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        };

        write().map_err(|e| {
            let _ = fs::remove_file(&tmp);
            self.unavailable(e)
        })
    }

    fn unavailable(&self, e: std::io::Error) -> AppError {
        AppError::StorageUnavailable(format!("{}: {}", self.path.display(), e))
    }

    fn malformed(&self, reason: String) -> AppError {
        AppError::MalformedExistingFile {
            path: self.path.clone(),
            reason,
        }
    }
}

fn recompute_total(day: &mut DayEntry) -> AppResult<()> {
    let mut total = WorkDuration::ZERO;
    for s in &day.sessions {
        total = total + WorkDuration::parse(&s.duration)?;
    }
    day.total_duration = total.to_string();
    Ok(())
}

impl SessionStore for JsonStore {
    fn append(&mut self, record: &SessionRecord) -> AppResult<()> {
        let mut days = self.load()?;
        let [date, start, end, duration] = record.to_row();
        let entry = SessionEntry {
            start,
            end,
            duration,
        };

        let idx = match days.iter().position(|d| d.date == date) {
            Some(i) => i,
            None => {
                days.push(DayEntry {
                    date,
                    sessions: Vec::new(),
                    total_duration: WorkDuration::ZERO.to_string(),
                });
                days.len() - 1
            }
        };

        let day = &mut days[idx];
        day.sessions.push(entry);
        recompute_total(day)?;

        self.save(&days)
    }

    fn list_all(&self) -> AppResult<Vec<SessionRecord>> {
        let days = self.load()?;
        let mut out = Vec::new();
        for day in &days {
            for s in &day.sessions {
                out.push(SessionRecord::from_labels(
                    &day.date,
                    &s.start,
                    &s.end,
                    &s.duration,
                )?);
            }
        }
        Ok(out)
    }

    fn relocate(&mut self, dir: &Path) -> AppResult<()> {
        prepare_data_dir(dir)?;
        let next = JsonStore::open(dir)?;
        *self = next;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }

    fn backend(&self) -> Backend {
        Backend::Json
    }
}
