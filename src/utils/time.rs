//! Time utilities: parsing HH:MM, derived durations, formatting hours.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_time_arg(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Wall-clock subtraction on the same nominal day, in fractional hours.
/// `end < start` yields a negative value: no overnight wrap is applied.
pub fn duration_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let duration = end - start;
    duration.num_seconds() as f64 / 3600.0
}
