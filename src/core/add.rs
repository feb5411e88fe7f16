use crate::db::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{ActivityEntry, normalize_habit};
use crate::ui::messages::success;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        store: &SessionStore,
        habit: &str,
        start: NaiveTime,
        end: NaiveTime,
        date: NaiveDate,
    ) -> AppResult<ActivityEntry> {
        // un habit vuoto non arriva mai allo store
        let habit_clean = normalize_habit(habit);
        if habit_clean.is_empty() {
            return Err(AppError::EmptyHabit);
        }

        store.append(&habit_clean, start, end, date)?;

        let entry = ActivityEntry::new(&habit_clean, start, end, date);
        success(format!(
            "Logged '{}' from {} to {} on {}.",
            entry.habit,
            entry.start_str(),
            entry.end_str(),
            entry.date_str()
        ));

        Ok(entry)
    }
}
