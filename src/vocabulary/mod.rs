//! Game vocabulary
//!
//! Provides the embedded default word list, file loading, and the
//! [`WordList`] used for secret selection and guess validation.

mod embedded;
pub mod loader;
mod word_list;

pub use embedded::{WORDS, WORDS_COUNT};
pub use word_list::WordList;
