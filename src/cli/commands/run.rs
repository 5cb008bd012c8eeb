use super::configured_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::session_loop::{HELP, SessionLoop, spawn_stdin_reader};
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::models::duration::WorkDuration;
use crate::ui::messages::{header, info};
use crate::ui::view::TerminalView;
use crate::utils::shorten_path;
use std::time::Duration;

/// Handle the `run` command: the interactive timer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { remind } = cmd {
        // 1️⃣ Store first: a broken store is reported before the timer starts.
        let store = configured_store(cfg)?;

        let reminder = match remind {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(*secs)),
            None => cfg.reminder(),
        };

        header("worktimer");
        info(format!(
            "Store: {} ({})",
            shorten_path(&store.location().display().to_string()),
            store.backend().as_str()
        ));
        match reminder {
            Some(every) => info(format!(
                "Reminder every {} of continuous work",
                WorkDuration::from(every)
            )),
            None => info("Reminders disabled"),
        }
        println!("{}", HELP);

        // 2️⃣ Hand over to the loop until `quit` or end of input.
        let tracker = Tracker::new(store, SystemClock, reminder);
        let mut session = SessionLoop::new(tracker, TerminalView::default());
        session.run(spawn_stdin_reader());
    }

    Ok(())
}
