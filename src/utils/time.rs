//! Time utilities: the fixed text formats used for session labels.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};

/// Calendar date of a session, e.g. `19.10.2026`.
pub const DATE_FMT: &str = "%d.%m.%Y";

/// Wall-clock time of day, e.g. `09:05:20`.
pub const TIME_FMT: &str = "%H:%M:%S";

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FMT).to_string()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn parse_time(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FMT).map_err(|_| AppError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_labels_are_day_first() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(d), "07.03.2026");
        assert_eq!(parse_date("07.03.2026").unwrap(), d);
    }

    #[test]
    fn iso_dates_are_rejected() {
        assert!(matches!(
            parse_date("2026-03-07"),
            Err(AppError::InvalidDate(_))
        ));
    }

    #[test]
    fn time_labels_carry_seconds() {
        let t = NaiveTime::from_hms_opt(9, 5, 20).unwrap();
        assert_eq!(format_time(t), "09:05:20");
        assert_eq!(parse_time("09:05:20").unwrap(), t);
        assert!(parse_time("09:05").is_err());
    }
}
