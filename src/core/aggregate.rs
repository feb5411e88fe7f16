//! Filtering and aggregation over loaded entries. Everything here is pure:
//! the store is read once, then views are computed in memory.

use crate::models::entry::ActivityEntry;
use crate::models::filter::HabitFilter;
use crate::models::summary::{ChartPoint, HabitSummary};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Entries with `date >= min_date` whose habit matches `habit`.
pub fn filter(entries: &[ActivityEntry], habit: &HabitFilter, min_date: NaiveDate) -> Vec<ActivityEntry> {
    entries
        .iter()
        .filter(|e| e.date >= min_date && habit.matches(&e.habit))
        .cloned()
        .collect()
}

/// Total derived hours per habit. Keys compare by exact string equality.
pub fn summarize(entries: &[ActivityEntry]) -> HabitSummary {
    let mut totals = HabitSummary::new();
    for e in entries {
        *totals.entry(e.habit.clone()).or_insert(0.0) += e.duration_hours;
    }
    totals
}

/// Total derived hours per `(date, habit)` pair, ordered by date then habit.
pub fn chart_series(entries: &[ActivityEntry]) -> Vec<ChartPoint> {
    let mut grouped: BTreeMap<(NaiveDate, String), f64> = BTreeMap::new();
    for e in entries {
        *grouped.entry((e.date, e.habit.clone())).or_insert(0.0) += e.duration_hours;
    }

    grouped
        .into_iter()
        .map(|((date, habit), duration_hours)| ChartPoint {
            date,
            habit,
            duration_hours,
        })
        .collect()
}
