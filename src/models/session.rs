use super::duration::WorkDuration;
use crate::errors::AppResult;
use crate::utils::time::{format_date, format_time, parse_date, parse_time};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One closed work session, the unit of persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub date: NaiveDate,        // ⇔ work_time.date (TEXT "DD.MM.YYYY")
    pub start_time: NaiveTime,  // ⇔ work_time.start_time (TEXT "HH:MM:SS")
    pub end_time: NaiveTime,    // ⇔ work_time.end_time (TEXT "HH:MM:SS")
    pub duration: WorkDuration, // ⇔ work_time.duration (TEXT "HH:MM:SS")
}

impl SessionRecord {
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        duration: WorkDuration,
    ) -> Self {
        Self {
            date,
            start_time,
            end_time,
            duration,
        }
    }

    /// Rebuild a record from its stored text columns.
    pub fn from_labels(date: &str, start: &str, end: &str, duration: &str) -> AppResult<Self> {
        Ok(Self {
            date: parse_date(date)?,
            start_time: parse_time(start)?,
            end_time: parse_time(end)?,
            duration: WorkDuration::parse(duration)?,
        })
    }

    pub fn date_str(&self) -> String {
        format_date(self.date)
    }

    pub fn start_str(&self) -> String {
        format_time(self.start_time)
    }

    pub fn end_str(&self) -> String {
        format_time(self.end_time)
    }

    pub fn duration_str(&self) -> String {
        self.duration.to_string()
    }

    /// Text columns in storage / export order: date, start, end, duration.
    pub fn to_row(&self) -> [String; 4] {
        [
            self.date_str(),
            self.start_str(),
            self.end_str(),
            self.duration_str(),
        ]
    }

    pub fn to_export(&self) -> SessionExport {
        let [date, start_time, end_time, duration] = self.to_row();
        SessionExport {
            date,
            start_time,
            end_time,
            duration,
        }
    }
}

/// Flat, text-only shape used by exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionExport {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
}
