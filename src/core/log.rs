use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 60;

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "session_saved" => Colour::Green,
        "relocate" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Trim to `max` visible characters, marking the cut with "...".
fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

/// One printable line; `op_w`, `id_w` and `date_w` are the column widths.
fn format_entry(entry: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let color = color_for_operation(&entry.operation);

    let op_target = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };
    let visible = truncate_visible(&op_target, OP_TARGET_MAX);

    // only the operation word is colored
    let colored = match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    };

    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        entry.id,
        entry.date,
        colored,
        padding,
        entry.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| {
                let len = e.operation.chars().count();
                if e.target.is_empty() {
                    len
                } else {
                    len + e.target.chars().count() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|e| e.date.chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for entry in &entries {
            println!("{}", format_entry(entry, id_w, date_w, op_w));
        }

        Ok(())
    }
}
