use crate::errors::AppError;
use crate::errors::AppResult;
use crate::models::entry::ActivityEntry;
use crate::utils::time::duration_hours;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

pub fn insert_entry(
    conn: &Connection,
    habit: &str,
    start_time: NaiveTime,
    end_time: NaiveTime,
    date: NaiveDate,
) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO habit_log (habit, start_time, end_time, date)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        habit,
        start_time.format("%H:%M").to_string(),
        end_time.format("%H:%M").to_string(),
        date.format("%Y-%m-%d").to_string(),
    ])?;
    Ok(())
}

pub fn load_entries(conn: &Connection) -> AppResult<Vec<ActivityEntry>> {
    // rowid keeps insertion order; the table has no id column of its own
    let mut stmt = conn.prepare(
        "SELECT habit, start_time, end_time, date
         FROM habit_log
         ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<ActivityEntry> {
    let habit: String = row.get("habit")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;
    let date_str: String = row.get("date")?;

    let start_time = parse_stored_time(1, &start_str)?;
    let end_time = parse_stored_time(2, &end_str)?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(ActivityEntry {
        habit,
        start_time,
        end_time,
        date,
        duration_hours: duration_hours(start_time, end_time),
    })
}

fn parse_stored_time(idx: usize, raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(raw.to_string())),
        )
    })
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM habit_log", [], |row| row.get(0))?;
    Ok(count)
}

pub fn distinct_habits(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT habit FROM habit_log ORDER BY habit ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut v = Vec::new();
    for r in rows {
        v.push(r?);
    }
    Ok(v)
}

pub fn date_bounds(conn: &Connection) -> AppResult<Option<(String, String)>> {
    let (first, last) = conn.query_row("SELECT MIN(date), MAX(date) FROM habit_log", [], |row| {
        Ok((
            row.get::<_, Option<String>>(0)?,
            row.get::<_, Option<String>>(1)?,
        ))
    })?;
    Ok(first.zip(last))
}
