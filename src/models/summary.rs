use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Total hours per habit over a filtered view, ordered by habit label.
pub type HabitSummary = BTreeMap<String, f64>;

/// One bar of the per-day chart: total hours of `habit` on `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub habit: String,
    pub duration_hours: f64,
}
