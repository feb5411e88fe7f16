// src/export/model.rs

use crate::models::entry::ActivityEntry;
use crate::models::summary::ChartPoint;
use serde::Serialize;

/// Flat row for entry export.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub habit: String,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    pub duration_hours: f64,
}

impl From<&ActivityEntry> for EntryExport {
    fn from(e: &ActivityEntry) -> Self {
        Self {
            habit: e.habit.clone(),
            start_time: e.start_str(),
            end_time: e.end_str(),
            date: e.date_str(),
            duration_hours: e.duration_hours,
        }
    }
}

/// Flat row for the per-day chart series.
#[derive(Serialize, Clone, Debug)]
pub struct ChartExport {
    pub date: String,
    pub habit: String,
    pub duration_hours: f64,
}

impl From<&ChartPoint> for ChartExport {
    fn from(p: &ChartPoint) -> Self {
        Self {
            date: p.date.format("%Y-%m-%d").to_string(),
            habit: p.habit.clone(),
            duration_hours: p.duration_hours,
        }
    }
}
