use crate::db::SessionStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub struct ClearLogic;

impl ClearLogic {
    /// Irreversible: every entry of the session is removed.
    pub fn apply(store: &SessionStore) -> AppResult<usize> {
        let removed = store.clear_all()?;
        warning(format!("All entries deleted ({removed} removed)."));
        Ok(removed)
    }
}
