//! Word list loading utilities
//!
//! Reads a vocabulary from disk or falls back to the embedded list.

use super::WordList;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a vocabulary from a newline-separated file
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_game::vocabulary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let list = WordList::load(content.lines())
        .with_context(|| format!("no usable words in {}", path.display()))?;
    log::info!("loaded {} words from {}", list.len(), path.display());
    Ok(list)
}

/// Load from `path` when given, otherwise use the embedded vocabulary
///
/// # Errors
///
/// Propagates errors from [`load_from_file`]; the embedded list never fails.
pub fn load_vocabulary(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path),
        None => {
            let list = WordList::embedded().context("embedded word list is empty")?;
            log::info!("using embedded vocabulary ({} words)", list.len());
            Ok(list)
        }
    }
}
