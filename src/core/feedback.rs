//! Guess evaluation
//!
//! Scores a guess against the secret using Wordle's two-pass rules:
//! - Pass 1 marks exact position matches (Correct) and consumes those secret letters
//! - Pass 2 walks the remaining guess letters left to right and claims the
//!   leftmost unconsumed equal secret letter (Present), otherwise Absent
//!
//! Each secret letter satisfies at most one guess position, so surplus
//! duplicates in the guess come back Absent.

use super::{GameError, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// Right letter, right position
    Correct,
    /// Letter occurs at another, unclaimed position
    Present,
    /// No unclaimed occurrence left in the secret
    Absent,
}

impl LetterFeedback {
    /// Square emoji used by most Wordle clients
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(letters: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let secret = Word::new("level").unwrap();
    /// let guess = Word::new("elfll").unwrap();
    /// let feedback = Feedback::calculate(&secret, &guess);
    ///
    /// assert_eq!(feedback.letters(), &[Present, Present, Absent, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        let secret = secret.letters();
        let guess = guess.letters();

        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: index pairs guess[i] with secret[i] and the matching result slot
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                result[i] = LetterFeedback::Correct;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            let claim = (0..WORD_LENGTH).find(|&j| !consumed[j] && secret[j] == guess[i]);
            if let Some(j) = claim {
                result[i] = LetterFeedback::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A guess wins iff every letter is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&l| l == LetterFeedback::Correct)
    }

    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&l| l == kind).count()
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|l| l.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score a raw guess string against a raw secret string
///
/// Both sides are case-normalized. This is the entry point for callers that
/// have not already validated their input as [`Word`]s.
///
/// # Errors
/// - `GameError::LengthMismatch` if either side is not exactly 5 characters
/// - `GameError::InvalidWord` if either side contains non-letters
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, GameError};
///
/// assert!(evaluate("crane", "CRANE").unwrap().is_win());
/// assert!(matches!(
///     evaluate("crane", "cranes"),
///     Err(GameError::LengthMismatch { secret: 5, guess: 6 })
/// ));
/// ```
pub fn evaluate(secret: &str, guess: &str) -> Result<Feedback, GameError> {
    let secret_len = secret.chars().count();
    let guess_len = guess.chars().count();
    if secret_len != WORD_LENGTH || guess_len != WORD_LENGTH {
        return Err(GameError::LengthMismatch {
            secret: secret_len,
            guess: guess_len,
        });
    }

    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    Ok(Feedback::calculate(&secret, &guess))
}
