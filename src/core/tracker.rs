//! Wires a [`TimerEngine`] to a [`SessionStore`] and a [`Clock`].
//!
//! The front-end only talks to the tracker: it forwards user events and
//! renders what comes back.

use crate::core::clock::Clock;
use crate::core::timer::TimerEngine;
use crate::errors::AppResult;
use crate::models::daily_total::DailyTotal;
use crate::models::duration::WorkDuration;
use crate::models::phase::Phase;
use crate::models::session::SessionRecord;
use crate::store::SessionStore;
use std::path::Path;
use std::time::Duration;

/// What one display tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub phase: Phase,
    pub elapsed: WorkDuration,
    pub reminder: bool,
}

pub struct Tracker<C: Clock> {
    engine: TimerEngine,
    store: Box<dyn SessionStore>,
    clock: C,
    /// Closed sessions whose write failed, oldest first.
    unsaved: Vec<SessionRecord>,
    /// Non-fatal problems for the front-end to show.
    notices: Vec<String>,
}

impl<C: Clock> Tracker<C> {
    pub fn new(store: Box<dyn SessionStore>, clock: C, reminder: Option<Duration>) -> Self {
        Self {
            engine: TimerEngine::new(reminder),
            store,
            clock,
            unsaved: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn start(&mut self) -> bool {
        self.engine.start(&self.clock)
    }

    pub fn pause(&mut self) -> bool {
        self.engine.pause(&self.clock)
    }

    pub fn resume(&mut self) -> bool {
        self.engine.resume(&self.clock)
    }

    /// Close the running or paused session and persist it.
    ///
    /// `Ok(None)` while Idle. The timer is back to Idle afterwards even when
    /// the write fails; in that case the error is returned and the record is
    /// kept for [`Tracker::retry_unsaved`].
    pub fn stop(&mut self) -> AppResult<Option<SessionRecord>> {
        let Some(record) = self.engine.finish(&self.clock) else {
            return Ok(None);
        };

        let saved = self.persist(&record);
        self.engine.reset();

        match saved {
            Ok(()) => Ok(Some(record)),
            Err(e) => {
                self.unsaved.push(record);
                Err(e)
            }
        }
    }

    /// Try again to write sessions whose first write failed.
    ///
    /// Returns the records written by this call. Stops at the first failure,
    /// leaving it and everything after it pending.
    pub fn retry_unsaved(&mut self) -> AppResult<Vec<SessionRecord>> {
        let mut written = Vec::new();

        while let Some(record) = self.unsaved.first().cloned() {
            self.persist(&record)?;
            self.unsaved.remove(0);
            written.push(record);
        }

        Ok(written)
    }

    pub fn unsaved(&self) -> &[SessionRecord] {
        &self.unsaved
    }

    /// Drain the warnings collected since the last call.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn persist(&mut self, record: &SessionRecord) -> AppResult<()> {
        self.store.append(record)?;

        if let Err(e) = self.store.log(
            "session_saved",
            &record.date_str(),
            &format!(
                "{} - {} ({})",
                record.start_str(),
                record.end_str(),
                record.duration
            ),
        ) {
            self.notices
                .push(format!("Failed to write internal log: {}", e));
        }

        Ok(())
    }

    /// Current display value.
    pub fn display(&self) -> WorkDuration {
        self.engine.display(self.clock.instant())
    }

    /// One display refresh plus reminder check.
    pub fn tick(&mut self) -> Tick {
        let now = self.clock.instant();
        Tick {
            phase: self.engine.phase(),
            elapsed: self.engine.display(now),
            reminder: self.engine.poll_reminder(now),
        }
    }

    pub fn totals(&self) -> AppResult<Vec<DailyTotal>> {
        self.store.aggregate_by_date()
    }

    pub fn relocate(&mut self, dir: &Path) -> AppResult<()> {
        self.store.relocate(dir)?;
        let target = self.store.location().display().to_string();
        if let Err(e) = self.store.log("relocate", &target, "Store relocated") {
            self.notices
                .push(format!("Failed to write internal log: {}", e));
        }
        Ok(())
    }
}
