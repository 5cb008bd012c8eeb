use super::duration::WorkDuration;
use chrono::NaiveDate;
use serde::Serialize;

/// Per-day rollup of closed sessions. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub sessions: usize,
    pub total: WorkDuration,
}
