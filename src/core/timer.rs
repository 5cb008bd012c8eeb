//! The work timer state machine.
//!
//! `TimerEngine` owns the Idle → Running ⇄ Paused → Idle lifecycle and the
//! elapsed-time accounting. It performs no I/O: transitions read a [`Clock`]
//! and a closed session comes out of [`TimerEngine::finish`] as a plain
//! [`SessionRecord`]. Transitions whose precondition does not hold are
//! silent no-ops and report `false`.

use crate::core::clock::Clock;
use crate::models::duration::WorkDuration;
use crate::models::phase::Phase;
use crate::models::session::SessionRecord;
use chrono::NaiveDateTime;
use std::time::{Duration, Instant};

/// Repeating "you have been working for a while" reminder.
///
/// Armed by Start/Continue, disarmed by Pause. Once it fires, the next
/// interval is measured from the firing instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reminder {
    interval: Option<Duration>,
    armed_at: Option<Instant>,
}

impl Reminder {
    /// `None` or a zero interval disables the reminder.
    pub fn new(interval: Option<Duration>) -> Self {
        Self {
            interval: interval.filter(|d| !d.is_zero()),
            armed_at: None,
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn arm(&mut self, now: Instant) {
        if self.interval.is_some() {
            self.armed_at = Some(now);
        }
    }

    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    /// Returns `true` at most once per elapsed interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        let (Some(interval), Some(armed_at)) = (self.interval, self.armed_at) else {
            return false;
        };

        if now.saturating_duration_since(armed_at) >= interval {
            self.armed_at = Some(now);
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimerEngine {
    phase: Phase,
    /// Running time banked by earlier running stretches.
    accumulated: Duration,
    /// Start of the current running stretch (only while Running).
    running_since: Option<Instant>,
    /// Wall-clock instant of the first Start of the session.
    started_at: Option<NaiveDateTime>,
    reminder: Reminder,
}

impl TimerEngine {
    pub fn new(reminder_interval: Option<Duration>) -> Self {
        Self {
            reminder: Reminder::new(reminder_interval),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.started_at
    }

    pub fn reminder_interval(&self) -> Option<Duration> {
        self.reminder.interval()
    }

    /// Idle → Running.
    pub fn start<C: Clock>(&mut self, clock: &C) -> bool {
        if !self.phase.is_idle() {
            return false;
        }

        let now = clock.instant();
        self.running_since = Some(now);
        self.started_at = Some(clock.local());
        self.phase = Phase::Running;
        self.reminder.arm(now);
        true
    }

    /// Running → Paused. The elapsed time is frozen.
    pub fn pause<C: Clock>(&mut self, clock: &C) -> bool {
        if !self.phase.is_running() {
            return false;
        }

        let now = clock.instant();
        self.accumulated = self.elapsed(now);
        self.running_since = None;
        self.phase = Phase::Paused;
        self.reminder.disarm();
        true
    }

    /// Paused → Running.
    pub fn resume<C: Clock>(&mut self, clock: &C) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }

        let now = clock.instant();
        self.running_since = Some(now);
        self.phase = Phase::Running;
        self.reminder.arm(now);
        true
    }

    /// Close the session as of now without touching the state.
    ///
    /// Returns `None` while Idle.
    pub fn finish<C: Clock>(&self, clock: &C) -> Option<SessionRecord> {
        let started_at = self.started_at.filter(|_| !self.phase.is_idle())?;

        let duration = self.elapsed(clock.instant());
        let ended_at = clock.local();

        Some(SessionRecord::new(
            ended_at.date(),
            started_at.time(),
            ended_at.time(),
            WorkDuration::from(duration),
        ))
    }

    /// Running/Paused → Idle, returning the closed session.
    pub fn stop<C: Clock>(&mut self, clock: &C) -> Option<SessionRecord> {
        let record = self.finish(clock)?;
        self.reset();
        Some(record)
    }

    /// Back to Idle defaults. The reminder interval survives.
    pub fn reset(&mut self) {
        *self = Self {
            reminder: Reminder::new(self.reminder.interval()),
            ..Self::default()
        };
    }

    /// Time spent Running so far in this session.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.phase, self.running_since) {
            (Phase::Running, Some(since)) => {
                self.accumulated + now.saturating_duration_since(since)
            }
            _ => self.accumulated,
        }
    }

    /// Value shown on the display: live while Running, frozen while Paused,
    /// `00:00:00` while Idle.
    pub fn display(&self, now: Instant) -> WorkDuration {
        WorkDuration::from(self.elapsed(now))
    }

    /// Check the reminder; only a Running timer can fire.
    pub fn poll_reminder(&mut self, now: Instant) -> bool {
        self.phase.is_running() && self.reminder.poll(now)
    }
}
