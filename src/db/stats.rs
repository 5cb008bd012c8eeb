use crate::db::pool::DbPool;
use crate::db::queries::{count_sessions, load_sessions};
use crate::errors::AppResult;
use crate::models::duration::WorkDuration;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &mut DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL SESSIONS
    //
    let count = count_sessions(&pool.conn)?;
    println!(
        "{}• Total sessions:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE + TOTAL TIME
    //
    // Dates are stored day-first, so the range is computed on parsed values.
    let sessions = load_sessions(&pool.conn)?;
    let first = sessions.iter().map(|s| s.date).min();
    let last = sessions.iter().map(|s| s.date).max();
    let total: WorkDuration = sessions.iter().map(|s| s.duration).sum();

    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(crate::utils::time::format_date)
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));
    println!("{}• Total time:{} {}", CYAN, RESET, total);

    //
    // 4) AVERAGE SESSIONS/DAY
    //
    if let (Some(f), Some(l)) = (first, last) {
        let days = (l - f).num_days().max(1);
        let avg = count as f64 / days as f64;
        println!("{}• Average sessions/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
