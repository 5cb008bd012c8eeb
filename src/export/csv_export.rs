use crate::errors::AppResult;
use crate::models::session::SessionRecord;
use csv::Writer;
use std::io::Write;

pub const CSV_HEADER: [&str; 4] = ["Date", "Start Time", "End Time", "Duration"];

/// Write sessions as CSV, one row per session in the given order.
pub fn write_csv<W: Write>(out: W, records: &[SessionRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record(CSV_HEADER)?;

    for r in records {
        wtr.write_record(r.to_row())?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::duration::WorkDuration;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn header_then_rows_in_field_order() {
        let r = SessionRecord::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 5, 20).unwrap(),
            WorkDuration::from_secs(50),
        );

        let mut buf = Vec::new();
        write_csv(&mut buf, &[r.clone(), r]).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Date,Start Time,End Time,Duration\n\
             19.10.2026,09:00:00,09:05:20,00:00:50\n\
             19.10.2026,09:00:00,09:05:20,00:00:50\n"
        );
    }
}
