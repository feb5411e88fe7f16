//! Split an interactive input line into arguments, honoring quotes.

use crate::errors::{AppError, AppResult};

/// Shell-like splitting: whitespace separates words, single and double
/// quotes group them, backslash escapes the next character outside single
/// quotes.
pub fn split_line(line: &str) -> AppResult<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('\''), _) => current.push(c),
            (Some('"'), '"') => quote = None,
            (_, '\\') => {
                let next = chars
                    .next()
                    .ok_or_else(|| AppError::Command("trailing backslash".into()))?;
                current.push(next);
                in_word = true;
            }
            (Some(_), _) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    args.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, _) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(AppError::Command(format!("unterminated {q} quote")));
    }
    if in_word {
        args.push(current);
    }

    Ok(args)
}
