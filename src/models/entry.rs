use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One logged activity interval.
///
/// `duration_hours` is derived from the two time-of-day values when the row
/// is read back; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub habit: String,         // ⇔ habit_log.habit (TEXT, trimmed + lowercase)
    pub start_time: NaiveTime, // ⇔ habit_log.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,   // ⇔ habit_log.end_time (TEXT "HH:MM")
    pub date: NaiveDate,       // ⇔ habit_log.date (TEXT "YYYY-MM-DD")
    pub duration_hours: f64,   // derivato: end_time - start_time
}

impl ActivityEntry {
    pub fn new(habit: &str, start_time: NaiveTime, end_time: NaiveTime, date: NaiveDate) -> Self {
        Self {
            habit: normalize_habit(habit),
            start_time,
            end_time,
            date,
            duration_hours: crate::utils::time::duration_hours(start_time, end_time),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }
}

/// Trim and lowercase a habit label, the only normalization ever applied.
pub fn normalize_habit(raw: &str) -> String {
    raw.trim().to_lowercase()
}
