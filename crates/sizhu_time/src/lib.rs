//! Local wall-clock input handling for four-pillar charts.
//!
//! This crate provides:
//! - `BirthMoment`, a validated proleptic Gregorian date with hour and minute
//! - Parsing of `YYYY-MM-DDThh:mm` text
//! - Whole-day counting between calendar dates
//!
//! No timezone, daylight-saving or solar-time correction is applied; callers
//! supply local values already resolved.

pub mod day_count;
pub mod error;
pub mod moment;

pub use chrono::NaiveDate;
pub use day_count::{days_between, julian_day_number};
pub use error::TimeError;
pub use moment::BirthMoment;
