//! Session-scoped SQLite store for the habit log.
//!
//! The `habit_log` table is dropped and recreated every time a store is
//! started: nothing logged in a previous session survives. Callers hold the
//! [`SessionStore`] and pass it explicitly to every operation.

use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::{ActivityEntry, normalize_habit};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const IN_MEMORY: &str = ":memory:";

const SESSION_SCHEMA: &str = r#"
    DROP TABLE IF EXISTS habit_log;

    CREATE TABLE habit_log (
        habit       TEXT,
        start_time  TEXT,
        end_time    TEXT,
        date        TEXT
    );
"#;

pub struct SessionStore {
    pub conn: Connection,
}

impl SessionStore {
    /// Open the database at `path` and start a fresh session on it.
    /// `":memory:"` keeps the whole session in RAM.
    pub fn start(path: &str) -> AppResult<Self> {
        if path == IN_MEMORY {
            return Self::start_in_memory();
        }

        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(Path::new(path))?;
        let store = Self { conn };
        store.reset_schema()?;
        debug!(path, "session store started");
        Ok(store)
    }

    pub fn start_in_memory() -> AppResult<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.reset_schema()?;
        debug!("in-memory session store started");
        Ok(store)
    }

    /// Drop and redefine `habit_log`. Any row left by a previous process is lost.
    fn reset_schema(&self) -> AppResult<()> {
        self.conn.execute_batch(SESSION_SCHEMA)?;
        Ok(())
    }

    /// Insert one row. The habit is stored trimmed and lowercased; time
    /// ranges are not validated, so inverted ranges are accepted as-is.
    pub fn append(
        &self,
        habit: &str,
        start_time: NaiveTime,
        end_time: NaiveTime,
        date: NaiveDate,
    ) -> AppResult<()> {
        let habit = normalize_habit(habit);
        queries::insert_entry(&self.conn, &habit, start_time, end_time, date)?;
        debug!(%habit, %date, "entry appended");
        Ok(())
    }

    /// Every stored entry with its derived duration, in insertion order.
    /// A single unparsable row aborts the whole read.
    pub fn load_all(&self) -> AppResult<Vec<ActivityEntry>> {
        queries::load_entries(&self.conn)
    }

    /// Delete every row. Returns how many were removed.
    pub fn clear_all(&self) -> AppResult<usize> {
        let removed = self.conn.execute("DELETE FROM habit_log", [])?;
        debug!(removed, "habit log cleared");
        Ok(removed)
    }

    pub fn count(&self) -> AppResult<i64> {
        queries::count_entries(&self.conn)
    }

    pub fn habits(&self) -> AppResult<Vec<String>> {
        queries::distinct_habits(&self.conn)
    }

    pub fn date_bounds(&self) -> AppResult<Option<(String, String)>> {
        queries::date_bounds(&self.conn)
    }
}
