//! Time sources for the timer.
//!
//! Elapsed time is always measured on the monotonic [`Instant`]; the local
//! wall-clock is only read to label a session (date, start and end time).

use chrono::{Local, NaiveDateTime};
use std::cell::Cell;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Monotonic instant, unaffected by system clock adjustments.
    fn instant(&self) -> Instant;

    /// Local wall-clock date and time.
    fn local(&self) -> NaiveDateTime;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn instant(&self) -> Instant {
        Instant::now()
    }

    fn local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Both readings advance together, so a session driven by a `ManualClock`
/// gets labels that agree with its measured duration.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    wall_origin: NaiveDateTime,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new(wall_origin: NaiveDateTime) -> Self {
        Self {
            origin: Instant::now(),
            wall_origin,
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Clock for ManualClock {
    fn instant(&self) -> Instant {
        self.origin + self.offset.get()
    }

    fn local(&self) -> NaiveDateTime {
        // Offsets beyond chrono's range cannot be produced by `advance` in practice.
        let offset = chrono::Duration::from_std(self.offset.get()).unwrap_or(chrono::Duration::MAX);
        self.wall_origin
            .checked_add_signed(offset)
            .unwrap_or(self.wall_origin)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn instant(&self) -> Instant {
        (**self).instant()
    }

    fn local(&self) -> NaiveDateTime {
        (**self).local()
    }
}
