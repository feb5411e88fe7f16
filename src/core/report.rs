//! Terminal rendering of filtered views: entry list, summary table, chart.

use crate::core::aggregate::{chart_series, summarize};
use crate::models::entry::ActivityEntry;
use crate::models::summary::ChartPoint;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_hours, habit_colour};
use crate::utils::formatting::{bold, hours2decimal};
use crate::utils::hours2readable;
use crate::utils::table::Table;

const NOTHING_TO_SHOW: &str = "No data to display for selected filters.";
const BAR_WIDTH: f64 = 40.0;

pub fn print_entries(entries: &[ActivityEntry]) {
    if entries.is_empty() {
        info(NOTHING_TO_SHOW);
        return;
    }

    let mut table = Table::new(vec!["Habit", "Start", "End", "Date", "Duration"]);
    for e in entries {
        let color = color_for_hours(e.duration_hours);
        table.add_row(vec![
            e.habit.clone(),
            e.start_str(),
            e.end_str(),
            e.date_str(),
            format!("{color}{}{RESET}", hours2readable(e.duration_hours)),
        ]);
    }

    header("Entries");
    print!("{}", table.render());
}

pub fn print_summary(entries: &[ActivityEntry]) {
    if entries.is_empty() {
        info(NOTHING_TO_SHOW);
        return;
    }

    let summary = summarize(entries);
    let mut table = Table::new(vec!["habit", "Total Hours"]);
    for (habit, hours) in &summary {
        table.add_row(vec![habit.clone(), hours2decimal(*hours)]);
    }

    header("Summary Table");
    print!("{}", table.render());
}

pub fn print_chart(entries: &[ActivityEntry]) {
    if entries.is_empty() {
        info(NOTHING_TO_SHOW);
        return;
    }

    let points = chart_series(entries);
    header("Activity Over Time");
    print!("{}", render_chart(&points));
}

/// Horizontal bars, one line per `(date, habit)` point. Negative totals get
/// no bar, only their value.
pub fn render_chart(points: &[ChartPoint]) -> String {
    let mut legend: Vec<&str> = points.iter().map(|p| p.habit.as_str()).collect();
    legend.sort_unstable();
    legend.dedup();

    let max = points
        .iter()
        .map(|p| p.duration_hours)
        .fold(0.0_f64, f64::max);
    let habit_w = legend.iter().map(|h| h.chars().count()).max().unwrap_or(5);

    let mut out = String::new();
    let mut last_date = None;

    for p in points {
        let date_cell = if last_date == Some(p.date) {
            " ".repeat(10)
        } else {
            p.date.format("%Y-%m-%d").to_string()
        };
        last_date = Some(p.date);

        let idx = legend.iter().position(|h| *h == p.habit).unwrap_or(0);
        let colour = habit_colour(idx);

        let len = if max > 0.0 && p.duration_hours > 0.0 {
            ((p.duration_hours / max) * BAR_WIDTH).round().max(1.0) as usize
        } else {
            0
        };
        let bar = colour.paint("█".repeat(len)).to_string();

        out.push_str(&format!(
            "{}  {:<habit_w$}  {} {}\n",
            date_cell,
            p.habit,
            bar,
            hours2decimal(p.duration_hours),
            habit_w = habit_w
        ));
    }

    out.push('\n');
    let legend_line: Vec<String> = legend
        .iter()
        .enumerate()
        .map(|(i, h)| habit_colour(i).paint(format!("■ {h}")).to_string())
        .collect();
    out.push_str(&format!("{} {}\n", bold("Legend:"), legend_line.join("  ")));

    out
}
