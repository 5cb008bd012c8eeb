use crate::errors::AppResult;
use crate::models::session::{SessionExport, SessionRecord};
use std::io::Write;

/// Write sessions as a pretty-printed JSON array of flat rows.
pub fn write_json<W: Write>(mut out: W, records: &[SessionRecord]) -> AppResult<()> {
    let rows: Vec<SessionExport> = records.iter().map(SessionRecord::to_export).collect();
    serde_json::to_writer_pretty(&mut out, &rows)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
