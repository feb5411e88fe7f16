use std::fmt;
use std::io::{self, BufRead, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_MAGENTA: &str = "\x1b[35m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header for views (summary, chart, feedback…)
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}### {}{}", FG_BLUE, BOLD, msg, RESET);
}

/// Print an input prompt and read one line from `input`.
/// Returns `None` on EOF.
pub fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{}{}{}{} ", FG_MAGENTA, BOLD, prompt, RESET);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask a yes/no confirmation; anything but "y"/"yes" (or EOF) is a no.
pub fn ask_confirmation<R: BufRead>(input: &mut R, question: &str) -> bool {
    warning(question);
    match prompt_line(input, "Confirm [y/N]:") {
        Ok(Some(s)) => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}
