//! Local wall-clock birth moment.
//!
//! Provides `BirthMoment`, the validated input to every chart computation.
//! Values are local civil time as supplied by the caller; no timezone or
//! daylight-saving conversion happens here.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Validated proleptic Gregorian date with hour and minute.
///
/// The minute is range-checked and carried for display, but chart
/// arithmetic only resolves to the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MomentFields", into = "MomentFields")]
pub struct BirthMoment {
    date: NaiveDate,
    hour: u32,
    minute: u32,
}

#[derive(Serialize, Deserialize)]
struct MomentFields {
    date: NaiveDate,
    hour: u32,
    minute: u32,
}

impl BirthMoment {
    /// Build a moment, rejecting nonexistent dates and out-of-range clock values.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        Self::from_date(date, hour, minute)
    }

    /// Build a moment from an already-valid date.
    pub fn from_date(date: NaiveDate, hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange { hour });
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange { minute });
        }
        Ok(Self { date, hour, minute })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month, 1..=12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Hour of day, 0..=23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl TryFrom<MomentFields> for BirthMoment {
    type Error = TimeError;

    fn try_from(fields: MomentFields) -> Result<Self, Self::Error> {
        Self::from_date(fields.date, fields.hour, fields.minute)
    }
}

impl From<BirthMoment> for MomentFields {
    fn from(m: BirthMoment) -> Self {
        Self {
            date: m.date,
            hour: m.hour,
            minute: m.minute,
        }
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour,
            self.minute
        )
    }
}

/// Parses `YYYY-MM-DDThh:mm`, `YYYY-MM-DD hh:mm`, or either with `:ss`.
///
/// Seconds are range-checked and then dropped. A leading `-` marks a year
/// before 1 CE (astronomical numbering).
impl FromStr for BirthMoment {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DDThh:mm, got {s}")))?;

        let (sign, unsigned_date) = match date_part.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date_part),
        };
        let date_fields: Vec<&str> = unsigned_date.split('-').collect();
        let time_fields: Vec<&str> = time_part.split(':').collect();
        if date_fields.len() != 3 || !(2..=3).contains(&time_fields.len()) {
            return Err(TimeError::Parse(format!("invalid date/time format: {s}")));
        }

        let year: i32 = parse_field(date_fields[0], "year")?;
        let month: u32 = parse_field(date_fields[1], "month")?;
        let day: u32 = parse_field(date_fields[2], "day")?;
        let hour: u32 = parse_field(time_fields[0], "hour")?;
        let minute: u32 = parse_field(time_fields[1], "minute")?;
        if let Some(text) = time_fields.get(2) {
            let second: u32 = parse_field(text, "second")?;
            if second > 59 {
                return Err(TimeError::Parse(format!("second out of range: {second}")));
            }
        }

        Self::new(sign * year, month, day, hour, minute)
    }
}

fn parse_field<T>(text: &str, name: &str) -> Result<T, TimeError>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse()
        .map_err(|e| TimeError::Parse(format!("{name} '{text}': {e}")))
}
