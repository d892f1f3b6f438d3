//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod error;
mod feedback;
mod word;

pub use error::{GameError, InvalidGuess};
pub use feedback::{Feedback, LetterFeedback, evaluate};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
