//! User input utilities for interactive command-line prompts.

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Prompts the user for a line of input.
///
/// Displays a prompt and waits for the user to enter text. The input is
/// read from stdin and returned with whitespace trimmed. Returns `None`
/// when stdin is closed (end of input).
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt} ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
