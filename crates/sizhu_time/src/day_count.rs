//! Whole-day counting on the proleptic Gregorian calendar.
//!
//! Day arithmetic never looks at the time of day: two moments on the same
//! calendar date are zero days apart regardless of their hours.

use chrono::{Datelike, NaiveDate};

/// Julian Day Number of 0001-01-01 (proleptic Gregorian) minus one.
///
/// chrono counts `num_days_from_ce` with 0001-01-01 = 1.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Julian Day Number (integer, noon-based) of a calendar date.
///
/// 2000-01-01 → 2451545.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET
}

/// Signed number of whole days from `from` to `to`.
///
/// Negative when `to` precedes `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
