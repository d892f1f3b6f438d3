//! Guess entry filtering shared by the shells

use crate::core::WORD_LENGTH;

/// Append typed or pasted text to a guess buffer
///
/// Non-letters are dropped and letters uppercased. If the cleaned text would
/// push the buffer past [`WORD_LENGTH`] the whole insertion is refused.
/// Returns whether anything was appended.
///
/// # Examples
/// ```
/// use wordle_game::game::filter_input;
///
/// let mut buffer = String::from("CR");
/// assert!(filter_input(&mut buffer, "a-n"));
/// assert_eq!(buffer, "CRAN");
/// assert!(!filter_input(&mut buffer, "es"));
/// assert_eq!(buffer, "CRAN");
/// ```
pub fn filter_input(buffer: &mut String, typed: &str) -> bool {
    let cleaned: String = typed
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if cleaned.is_empty() || buffer.len() + cleaned.len() > WORD_LENGTH {
        return false;
    }

    buffer.push_str(&cleaned);
    true
}
