//! Coaching prompt built from a filtered view.

use crate::models::entry::ActivityEntry;

const COACH_ROLE: &str = "You are a friendly productivity coach.";
const COACH_REQUEST: &str = "Please provide a motivational summary, highlight their most consistent habit, and gently suggest any improvement.";

/// One log line as the model sees it.
pub fn entry_line(e: &ActivityEntry) -> String {
    format!(
        "{}: {} to {} on {} ({:.2} hours)",
        e.habit,
        e.start_str(),
        e.end_str(),
        e.date_str(),
        e.duration_hours
    )
}

pub fn build_prompt(entries: &[ActivityEntry], days_back: i64) -> String {
    let context = entries
        .iter()
        .map(entry_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{COACH_ROLE}\nHere's the user's activity log for the past {days_back} days:\n\n{context}\n\n{COACH_REQUEST}\n"
    )
}
