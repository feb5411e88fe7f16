/// ANSI color helper utilities for terminal output.
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Hours color:
/// \>0 → green
/// \<0 → red (inverted range)
/// 0 → grey
pub fn color_for_hours(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        GREY
    }
}

const HABIT_PALETTE: [Colour; 6] = [
    Colour::Cyan,
    Colour::Yellow,
    Colour::Purple,
    Colour::Green,
    Colour::Blue,
    Colour::RGB(255, 153, 51), // arancione
];

/// Stable color for the n-th habit of a chart legend.
pub fn habit_colour(index: usize) -> Colour {
    HABIT_PALETTE[index % HABIT_PALETTE.len()]
}
