use std::io::{self, BufRead, Write};

use crate::config::Value;

/// Prompts on stdout and parses two whitespace-separated integers from
/// the next stdin line. `None` on end of input or a malformed line;
/// the caller substitutes its documented defaults.
pub fn prompt_index_pair(prompt: &str) -> Option<(i64, i64)> {
    let line = prompt_line(prompt)?;
    let mut parts = line.split_whitespace();
    let first = parts.next()?.parse().ok()?;
    let second = parts.next()?.parse().ok()?;
    Some((first, second))
}

/// Same as `prompt_index_pair`, for the row/column/value update triple.
pub fn prompt_update_triple(prompt: &str) -> Option<(i64, i64, Value)> {
    let line = prompt_line(prompt)?;
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let value = parts.next()?.parse().ok()?;
    Some((row, col, value))
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// Maps possibly negative console input onto `usize` indices.
/// Negative values land past any matrix end, so transforms reject them
/// as out-of-range instead of silently wrapping.
pub fn to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
