//! Single-pair evaluation command
//!
//! Scores one guess against one secret without starting a game.

use crate::core::{Feedback, GameError, Word, evaluate};
use crate::vocabulary::WordList;

/// Result of scoring one guess
pub struct EvaluationResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// Whether both words are in the active vocabulary
    pub in_vocabulary: bool,
}

/// Score `guess` against `secret`
///
/// Words outside the vocabulary are still scored; `in_vocabulary` records it.
///
/// # Errors
///
/// Returns `GameError::LengthMismatch` or `GameError::InvalidWord` for
/// malformed input.
pub fn evaluate_pair(
    secret: &str,
    guess: &str,
    vocabulary: &WordList,
) -> Result<EvaluationResult, GameError> {
    let feedback = evaluate(secret, guess)?;
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;

    let in_vocabulary = vocabulary.contains_word(&secret) && vocabulary.contains_word(&guess);
    if !in_vocabulary {
        log::warn!("{secret}/{guess}: scored outside the loaded vocabulary");
    }

    Ok(EvaluationResult {
        secret,
        guess,
        feedback,
        in_vocabulary,
    })
}
