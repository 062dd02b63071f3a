//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum number of characters, adding "..." if
/// needed.
///
/// Counts characters rather than bytes so multibyte values never split a
/// character at the cut point.
///
/// # Examples
///
/// ```rust
/// use shopcart_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}
