//! Date-to-serial conversion for the 1900 date system

use chrono::{NaiveDate, Timelike};
use sheetsmith_core::DateTimeValue;

/// Convert a date/date-time value to its spreadsheet serial number
///
/// Serial day 1 is 1900-01-01 in the 1900 date system. Dates on or after
/// 1900-03-01 are shifted forward one day to account for the format's
/// inherited Lotus 1-2-3 leap-year bug (the phantom 1900-02-29).
/// Date-only values yield a whole number; date-times add the day
/// fraction.
pub(crate) fn to_serial(value: &DateTimeValue) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 31).expect("fixed epoch");
    let mut days = (value.date() - epoch).num_days();
    if days >= 60 {
        days += 1;
    }
    let days = days as f64;
    if value.is_date_only() {
        days
    } else {
        days + value.value().num_seconds_from_midnight() as f64 / 86_400.0
    }
}

/// Check whether a date falls inside the 1900 date system
///
/// Serial numbers start at 1 (1900-01-01); earlier dates have no
/// representation and the writer rejects them up front.
pub(crate) fn in_range(value: &DateTimeValue) -> bool {
    value.date() >= NaiveDate::from_ymd_opt(1900, 1, 1).expect("fixed date")
}

/// Render a serial number, trimming the fraction for whole days
pub(crate) fn render_serial(serial: f64) -> String {
    if serial.fract() == 0.0 {
        format!("{}", serial as i64)
    } else {
        format!("{}", serial)
    }
}
