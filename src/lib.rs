//! Wordle Game
//!
//! Guess the five-letter word in six tries, with green/yellow/gray feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordle_game::core::evaluate;
//! use wordle_game::game::Session;
//! use wordle_game::vocabulary::WordList;
//!
//! // Score a guess directly
//! let feedback = evaluate("crane", "slate").unwrap();
//! println!("{feedback}");
//!
//! // Or play a session
//! let words = WordList::load(["crane", "slate", "plane"]).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = Session::new(&words, &mut rng);
//! session.submit("slate").unwrap();
//! assert_eq!(session.attempts().len(), 1);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod vocabulary;

// Session state machine and statistics
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
