use crate::models::entry::normalize_habit;
use chrono::{Duration, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Habit part of the filtered-view predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HabitFilter {
    #[default]
    All,
    Habit(String),
}

impl HabitFilter {
    /// `"all"` (any case) selects every habit; anything else is normalized
    /// the same way stored labels are.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            HabitFilter::All
        } else {
            HabitFilter::Habit(normalize_habit(raw))
        }
    }

    pub fn matches(&self, habit: &str) -> bool {
        match self {
            HabitFilter::All => true,
            HabitFilter::Habit(h) => h == habit,
        }
    }
}

impl fmt::Display for HabitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HabitFilter::All => write!(f, "All"),
            HabitFilter::Habit(h) => write!(f, "{h}"),
        }
    }
}

/// Time range selector: how many days back from today the view starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    Week,
    Fortnight,
    Month,
}

impl TimeWindow {
    pub fn days_back(&self) -> i64 {
        match self {
            TimeWindow::Week => 7,
            TimeWindow::Fortnight => 14,
            TimeWindow::Month => 30,
        }
    }

    pub fn min_date(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days_back())
    }
}
