//! Whole-second durations rendered as `HH:MM:SS`.
//!
//! Hours are never wrapped at 24: a 25 hour session renders as `25:00:00`.

use crate::errors::{AppError, AppResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkDuration(u64);

impl WorkDuration {
    pub const ZERO: WorkDuration = WorkDuration(0);

    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn hours(&self) -> u64 {
        self.0 / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.0 % 3600) / 60
    }

    pub fn seconds(&self) -> u64 {
        self.0 % 60
    }

    /// Parse `H:MM:SS` (any number of hour digits).
    pub fn parse(s: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidDuration(s.to_string());

        let mut parts = s.trim().split(':');
        let (Some(h), Some(m), Some(sec), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let h: u64 = h.parse().map_err(|_| invalid())?;
        let m: u64 = m.parse().map_err(|_| invalid())?;
        let sec: u64 = sec.parse().map_err(|_| invalid())?;

        if m >= 60 || sec >= 60 {
            return Err(invalid());
        }

        // Corrupt stored text may carry an absurd hour field.
        h.checked_mul(3600)
            .and_then(|secs| secs.checked_add(m * 60 + sec))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl From<Duration> for WorkDuration {
    /// Sub-second remainders are truncated.
    fn from(d: Duration) -> Self {
        Self(d.as_secs())
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

impl FromStr for WorkDuration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for WorkDuration {
    type Output = WorkDuration;

    fn add(self, rhs: Self) -> Self::Output {
        WorkDuration(self.0.saturating_add(rhs.0))
    }
}

impl Sum for WorkDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(WorkDuration::ZERO, Add::add)
    }
}

impl Serialize for WorkDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
