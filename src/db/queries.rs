use crate::errors::AppResult;
use crate::models::session::SessionRecord;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

pub fn insert_session(conn: &Connection, record: &SessionRecord) -> AppResult<i64> {
    let [date, start, end, duration] = record.to_row();

    conn.execute(
        "INSERT INTO work_time (date, start_time, end_time, duration)
         VALUES (?1, ?2, ?3, ?4)",
        params![date, start, end, duration],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All sessions in insertion order.
pub fn load_sessions(conn: &Connection) -> AppResult<Vec<SessionRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date, start_time, end_time, duration
         FROM work_time
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<SessionRecord> {
    let date: String = row.get("date")?;
    let start: String = row.get("start_time")?;
    let end: String = row.get("end_time")?;
    let duration: String = row.get("duration")?;

    SessionRecord::from_labels(&date, &start, &end, &duration).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub fn count_sessions(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM work_time", [], |row| row.get(0))?)
}
