//! Interactive front-end of `worktimer run`.
//!
//! A helper thread reads stdin lines and sends them over a channel. All
//! state lives on the loop's thread: user commands and the display tick are
//! handled one at a time, and the next tick is scheduled only after the
//! current one has finished.

use crate::core::clock::Clock;
use crate::core::tracker::Tracker;
use crate::ui::view::View;
use crate::utils::path::expand_tilde;
use crate::utils::time::format_time;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub const HELP: &str = "\
Commands:
  start     (s)   start a new session
  pause     (p)   pause the running session
  continue  (c)   continue a paused session
  stop      (x)   stop and save the session
  status          show the timer
  summary         show the daily summary
  save            retry sessions that could not be saved
  relocate DIR    write sessions to DIR from now on (this run only)
  help      (h)   this help
  quit      (q)   leave (use `quit!` to discard an open session)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Continue,
    Stop,
    Status,
    Summary,
    Save,
    Relocate(PathBuf),
    Help,
    Quit { force: bool },
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if let Some((verb, arg)) = line.split_once(char::is_whitespace)
            && verb.eq_ignore_ascii_case("relocate")
        {
            return Some(Command::Relocate(expand_tilde(arg.trim())));
        }

        match line.to_lowercase().as_str() {
            "start" | "s" => Some(Command::Start),
            "pause" | "p" => Some(Command::Pause),
            "continue" | "resume" | "c" => Some(Command::Continue),
            "stop" | "x" => Some(Command::Stop),
            "status" | "" => Some(Command::Status),
            "summary" | "sum" => Some(Command::Summary),
            "save" => Some(Command::Save),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit { force: false }),
            "quit!" | "q!" => Some(Command::Quit { force: true }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct SessionLoop<C: Clock, V: View> {
    tracker: Tracker<C>,
    view: V,
    tick_every: Duration,
}

impl<C: Clock, V: View> SessionLoop<C, V> {
    pub fn new(tracker: Tracker<C>, view: V) -> Self {
        Self {
            tracker,
            view,
            tick_every: TICK_INTERVAL,
        }
    }

    pub fn tracker(&self) -> &Tracker<C> {
        &self.tracker
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn handle(&mut self, cmd: Command) -> Flow {
        let flow = self.dispatch(cmd);
        self.flush_notices();
        flow
    }

    fn flush_notices(&mut self) {
        for notice in self.tracker.take_notices() {
            self.view.warning(&notice);
        }
    }

    fn dispatch(&mut self, cmd: Command) -> Flow {
        match cmd {
            Command::Start => {
                if self.tracker.start() {
                    let at = self
                        .tracker
                        .engine()
                        .started_at()
                        .map(|t| format_time(t.time()))
                        .unwrap_or_default();
                    self.view.info(&format!("Started at {}", at));
                }
            }
            Command::Pause => {
                if self.tracker.pause() {
                    self.view.elapsed(self.tracker.phase(), self.tracker.display());
                }
            }
            Command::Continue => {
                if self.tracker.resume() {
                    self.view.info("Continuing");
                }
            }
            Command::Stop => self.stop(),
            Command::Status => {
                self.view.elapsed(self.tracker.phase(), self.tracker.display());
            }
            Command::Summary => self.show_totals(),
            Command::Save => self.retry(),
            Command::Relocate(dir) => match self.tracker.relocate(&dir) {
                Ok(()) => self.view.info(&format!(
                    "Sessions are now written to {}",
                    self.tracker.store().location().display()
                )),
                // The current store stays in use.
                Err(e) => self.view.error(&e),
            },
            Command::Help => self.view.info(HELP),
            Command::Quit { force } => return self.quit(force),
        }
        Flow::Continue
    }

    pub fn on_tick(&mut self) {
        let tick = self.tracker.tick();
        if tick.phase.is_running() {
            self.view.elapsed(tick.phase, tick.elapsed);
        }
        if tick.reminder {
            self.view.reminder(tick.elapsed);
        }
    }

    fn stop(&mut self) {
        match self.tracker.stop() {
            Ok(Some(record)) => {
                self.view.saved(&record);
                self.show_totals();
            }
            Ok(None) => {}
            Err(e) => {
                self.view.error(&e);
                self.view
                    .warning("The session was kept in memory: type `save` to try again.");
            }
        }
    }

    fn retry(&mut self) {
        if self.tracker.unsaved().is_empty() {
            self.view.info("Nothing to save.");
            return;
        }

        match self.tracker.retry_unsaved() {
            Ok(written) => {
                for r in &written {
                    self.view.saved(r);
                }
                self.show_totals();
            }
            Err(e) => {
                self.view.error(&e);
                self.view.warning(&format!(
                    "{} session(s) still unsaved.",
                    self.tracker.unsaved().len()
                ));
            }
        }
    }

    fn show_totals(&mut self) {
        match self.tracker.totals() {
            Ok(totals) => self.view.totals(&totals),
            Err(e) => self.view.error(&e),
        }
    }

    fn quit(&mut self, force: bool) -> Flow {
        if force {
            return Flow::Quit;
        }

        if !self.tracker.phase().is_idle() {
            self.view
                .warning("A session is still open: `stop` it first, or `quit!` to discard it.");
            return Flow::Continue;
        }

        if !self.tracker.unsaved().is_empty() {
            self.view.warning(&format!(
                "{} session(s) were not saved: `save` them first, or `quit!` to discard.",
                self.tracker.unsaved().len()
            ));
            return Flow::Continue;
        }

        Flow::Quit
    }

    /// Drive the loop until `quit` or end of input.
    pub fn run(&mut self, input: Receiver<String>) {
        let mut next_tick = Instant::now() + self.tick_every;

        loop {
            let wait = next_tick.saturating_duration_since(Instant::now());

            match input.recv_timeout(wait) {
                Ok(line) => match Command::parse(&line) {
                    Some(cmd) => {
                        if self.handle(cmd) == Flow::Quit {
                            break;
                        }
                    }
                    None => self
                        .view
                        .warning(&format!("Unknown command '{}'. Type `help`.", line.trim())),
                },
                Err(RecvTimeoutError::Timeout) => {
                    self.on_tick();
                    next_tick = Instant::now() + self.tick_every;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    if !self.tracker.phase().is_idle() {
                        self.view.warning("Input closed: the open session was discarded.");
                    }
                    if !self.tracker.unsaved().is_empty() {
                        self.view.warning(&format!(
                            "Input closed: {} unsaved session(s) were lost.",
                            self.tracker.unsaved().len()
                        ));
                    }
                    break;
                }
            }
        }
    }
}

/// Forward stdin lines to a channel until EOF.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    rx
}
