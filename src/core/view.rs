use crate::core::aggregate;
use crate::db::SessionStore;
use crate::errors::AppResult;
use crate::models::entry::ActivityEntry;
use crate::models::filter::{HabitFilter, TimeWindow};
use chrono::NaiveDate;
use tracing::debug;

/// Habit + date-window predicate defining a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewQuery {
    pub habit: HabitFilter,
    pub min_date: NaiveDate,
    /// Length of the window in days, used to phrase the feedback prompt.
    pub days_back: i64,
}

impl ViewQuery {
    pub fn from_window(habit: HabitFilter, window: TimeWindow, today: NaiveDate) -> Self {
        Self {
            habit,
            min_date: window.min_date(today),
            days_back: window.days_back(),
        }
    }

    pub fn since(habit: HabitFilter, since: NaiveDate, today: NaiveDate) -> Self {
        Self {
            habit,
            min_date: since,
            days_back: (today - since).num_days().max(0),
        }
    }

    pub fn describe(&self) -> String {
        format!("habit: {} | since: {}", self.habit, self.min_date)
    }
}

pub struct ViewLogic;

impl ViewLogic {
    /// Read the whole store and apply the view predicate.
    pub fn load(store: &SessionStore, query: &ViewQuery) -> AppResult<Vec<ActivityEntry>> {
        let all = store.load_all()?;
        let view = aggregate::filter(&all, &query.habit, query.min_date);
        debug!(query = %query.describe(), kept = view.len(), total = all.len(), "view loaded");
        Ok(view)
    }
}
