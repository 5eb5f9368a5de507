//! Error types for wall-clock validation and parsing.

/// Errors from constructing or parsing a local wall-clock moment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day triple does not name a proleptic Gregorian date.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    #[error("hour out of range: {hour} (must be 0..=23)")]
    HourOutOfRange { hour: u32 },
    /// Minute outside 0..=59.
    #[error("minute out of range: {minute} (must be 0..=59)")]
    MinuteOutOfRange { minute: u32 },
    /// Text could not be parsed as `YYYY-MM-DDThh:mm`.
    #[error("parse error: {0}")]
    Parse(String),
}
