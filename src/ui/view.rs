//! Rendering side of the interactive session.
//!
//! The session loop never prints directly: everything the user sees goes
//! through a [`View`], so the loop can be driven and inspected in tests.

use crate::core::summary::render_totals;
use crate::errors::AppError;
use crate::models::daily_total::DailyTotal;
use crate::models::duration::WorkDuration;
use crate::models::phase::Phase;
use crate::models::session::SessionRecord;
use crate::ui::messages::{error, info, reminder, success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::describe_phase;
use std::io::{self, Write};

pub trait View {
    /// Periodic refresh of the elapsed time.
    fn elapsed(&mut self, phase: Phase, elapsed: WorkDuration);

    fn reminder(&mut self, elapsed: WorkDuration);

    fn saved(&mut self, record: &SessionRecord);

    fn totals(&mut self, totals: &[DailyTotal]);

    fn info(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    fn error(&mut self, err: &AppError);
}

/// ANSI terminal rendering.
#[derive(Debug, Default)]
pub struct TerminalView {
    /// A `\r` status line is on screen and has not been terminated yet.
    line_open: bool,
}

impl TerminalView {
    fn close_line(&mut self) {
        if self.line_open {
            println!();
            self.line_open = false;
        }
    }
}

impl View for TerminalView {
    fn elapsed(&mut self, phase: Phase, elapsed: WorkDuration) {
        let (label, color) = describe_phase(phase);
        print!("\r⏱  {color}{elapsed}{RESET} {GREY}[{label}]{RESET}  ");
        io::stdout().flush().ok();
        self.line_open = true;
    }

    fn reminder(&mut self, elapsed: WorkDuration) {
        self.close_line();
        reminder(format!(
            "You have been working for {} without a break.",
            elapsed
        ));
    }

    fn saved(&mut self, record: &SessionRecord) {
        self.close_line();
        success(format!(
            "Session saved: {} {} → {} ({})",
            record.date_str(),
            record.start_str(),
            record.end_str(),
            record.duration
        ));
    }

    fn totals(&mut self, totals: &[DailyTotal]) {
        self.close_line();
        if totals.is_empty() {
            info("No sessions recorded yet.");
        } else {
            print!("{}", render_totals(totals));
        }
    }

    fn info(&mut self, msg: &str) {
        self.close_line();
        info(msg);
    }

    fn warning(&mut self, msg: &str) {
        self.close_line();
        warning(msg);
    }

    fn error(&mut self, err: &AppError) {
        self.close_line();
        error(err);
    }
}
