//! The set of words a game may use as secrets and accept as guesses

use crate::core::{GameError, WORD_LENGTH, Word};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Read-only vocabulary of five-letter words
///
/// Never empty: construction fails with `GameError::EmptyVocabulary` instead.
/// Keeps first-seen order for sampling and a hash set for membership.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a vocabulary from raw lines
    ///
    /// Lines are trimmed; only those exactly [`WORD_LENGTH`] characters long
    /// survive, uppercased. Duplicates are dropped.
    ///
    /// # Errors
    /// Returns `GameError::EmptyVocabulary` if no line survives filtering.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::vocabulary::WordList;
    ///
    /// let list = WordList::load(["cat", "apple", "CRANE", "plane", "a"]).unwrap();
    /// assert_eq!(list.len(), 3);
    /// assert!(list.contains("crane"));
    /// ```
    pub fn load<I, S>(lines: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();
        let mut skipped = 0usize;

        for line in lines {
            let trimmed = line.as_ref().trim();
            if trimmed.chars().count() != WORD_LENGTH {
                skipped += 1;
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => {
                    if index.insert(word) {
                        words.push(word);
                    }
                }
                Err(err) => {
                    log::debug!("skipping word list entry {trimmed:?}: {err}");
                    skipped += 1;
                }
            }
        }

        if words.is_empty() {
            return Err(GameError::EmptyVocabulary);
        }

        log::debug!("loaded {} words, skipped {skipped} lines", words.len());
        Ok(Self { words, index })
    }

    /// Load the vocabulary compiled into the binary
    ///
    /// # Errors
    /// Returns `GameError::EmptyVocabulary` only if the embedded list is broken.
    pub fn embedded() -> Result<Self, GameError> {
        Self::load(super::WORDS)
    }

    /// Pick a secret uniformly at random
    #[must_use]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())]
    }

    /// Case-insensitive membership test for raw text
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.index.contains(&w))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
