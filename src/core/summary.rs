//! Per-day rollup and its table rendering.

use crate::models::daily_total::DailyTotal;
use crate::models::duration::WorkDuration;
use crate::models::session::SessionRecord;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};
use std::collections::BTreeMap;

/// Group sessions by date; most recent date first.
pub fn aggregate(records: &[SessionRecord]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<_, (usize, WorkDuration)> = BTreeMap::new();

    for r in records {
        let entry = by_date.entry(r.date).or_insert((0, WorkDuration::ZERO));
        entry.0 += 1;
        entry.1 = entry.1 + r.duration;
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, (sessions, total))| DailyTotal {
            date,
            sessions,
            total,
        })
        .collect()
}

pub fn render_totals(totals: &[DailyTotal]) -> String {
    let mut table = Table::new(vec![
        Column::new("Date"),
        Column::new("Sessions"),
        Column::new("Total"),
    ]);

    for t in totals {
        table.add_row(vec![
            crate::utils::time::format_date(t.date),
            t.sessions.to_string(),
            colorize_optional(&t.total.to_string()),
        ]);
    }

    table.render()
}

pub fn render_sessions(records: &[SessionRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("Date"),
        Column::new("Start Time"),
        Column::new("End Time"),
        Column::new("Duration"),
    ]);

    for (i, r) in records.iter().enumerate() {
        let [date, start, end, duration] = r.to_row();
        table.add_row(vec![
            (i + 1).to_string(),
            date,
            start,
            end,
            colorize_optional(&duration),
        ]);
    }

    table.render()
}
