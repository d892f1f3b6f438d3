//! Game error types

use super::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Why a guess was refused without consuming an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    WrongLength(usize),
    NotALetter,
    NotInWordList(Word),
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Guess must be {WORD_LENGTH} letters, got {len}")
            }
            Self::NotALetter => write!(f, "Guess may only contain letters"),
            Self::NotInWordList(word) => write!(f, "{word} is not in the word list"),
        }
    }
}

/// Errors surfaced by the vocabulary, evaluator and session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No usable words left after filtering the word list
    EmptyVocabulary,
    /// Evaluator called with secret/guess not both `WORD_LENGTH` long
    LengthMismatch { secret: usize, guess: usize },
    /// Evaluator called with text that is not a word
    InvalidWord(WordError),
    /// Guess refused; the player may try again
    InvalidGuess(InvalidGuess),
    /// Session already won or lost; restart before guessing
    SessionOver,
    /// Restart requested while the current game is still being played
    GameInProgress,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVocabulary => {
                write!(f, "Word list contains no {WORD_LENGTH}-letter words")
            }
            Self::LengthMismatch { secret, guess } => write!(
                f,
                "Secret and guess must both be {WORD_LENGTH} letters (secret {secret}, guess {guess})"
            ),
            Self::InvalidWord(err) => write!(f, "{err}"),
            Self::InvalidGuess(reason) => write!(f, "{reason}"),
            Self::SessionOver => write!(f, "Game is over; start a new game"),
            Self::GameInProgress => write!(f, "Finish the current game before starting a new one"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

impl From<InvalidGuess> for GameError {
    fn from(reason: InvalidGuess) -> Self {
        Self::InvalidGuess(reason)
    }
}

impl GameError {
    /// Whether the player can simply try again
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidGuess(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GameError::EmptyVocabulary.to_string(),
            "Word list contains no 5-letter words"
        );
        let word = Word::new("xyzzy").unwrap();
        assert_eq!(
            GameError::from(InvalidGuess::NotInWordList(word)).to_string(),
            "XYZZY is not in the word list"
        );
    }

    #[test]
    fn only_invalid_guess_is_recoverable() {
        assert!(GameError::InvalidGuess(InvalidGuess::NotALetter).is_recoverable());
        assert!(!GameError::EmptyVocabulary.is_recoverable());
        assert!(!GameError::SessionOver.is_recoverable());
        assert!(!GameError::GameInProgress.is_recoverable());
        assert!(
            !GameError::LengthMismatch {
                secret: 5,
                guess: 4
            }
            .is_recoverable()
        );
    }
}
