//! Evaluator audit - score every guess against every secret
//!
//! Runs the evaluator across the vocabulary cross product in parallel and
//! checks each result against an independent per-letter characterization.

use crate::core::{Feedback, LetterFeedback, WORD_LENGTH, Word};
use crate::vocabulary::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Outcome of an audit run
#[derive(Debug)]
pub struct AuditResult {
    pub guesses: usize,
    pub secrets: usize,
    pub pairs: usize,
    pub wins: usize,
    /// Index `n` counts pairs with exactly `n` Correct letters
    pub correct_distribution: [usize; WORD_LENGTH + 1],
    pub violations: Vec<String>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

#[derive(Debug, Default)]
struct Tally {
    pairs: usize,
    wins: usize,
    correct_distribution: [usize; WORD_LENGTH + 1],
    violations: Vec<String>,
}

impl Tally {
    fn merge(mut self, other: Self) -> Self {
        self.pairs += other.pairs;
        self.wins += other.wins;
        for (mine, theirs) in self
            .correct_distribution
            .iter_mut()
            .zip(other.correct_distribution)
        {
            *mine += theirs;
        }
        self.violations.extend(other.violations);
        self
    }
}

/// Audit the evaluator over the vocabulary
///
/// `limit` caps the number of guess words; every guess is still scored
/// against the whole vocabulary.
#[must_use]
pub fn run_audit(vocabulary: &WordList, limit: Option<usize>) -> AuditResult {
    let secrets = vocabulary.words();
    let guesses = &secrets[..limit.unwrap_or(secrets.len()).min(secrets.len())];

    let pb = ProgressBar::new(guesses.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░")),
    );
    pb.set_message("scoring guesses");

    let start = Instant::now();
    let tally = guesses
        .par_iter()
        .map(|guess| {
            let tally = audit_guess(guess, secrets);
            pb.inc(1);
            tally
        })
        .reduce(Tally::default, Tally::merge);
    pb.finish_and_clear();

    let duration = start.elapsed();
    let pairs_per_second = if duration.as_secs_f64() > 0.0 {
        tally.pairs as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    log::info!(
        "audited {} pairs, {} violations",
        tally.pairs,
        tally.violations.len()
    );

    AuditResult {
        guesses: guesses.len(),
        secrets: secrets.len(),
        pairs: tally.pairs,
        wins: tally.wins,
        correct_distribution: tally.correct_distribution,
        violations: tally.violations,
        duration,
        pairs_per_second,
    }
}

fn audit_guess(guess: &Word, secrets: &[Word]) -> Tally {
    let mut tally = Tally::default();
    for secret in secrets {
        let feedback = Feedback::calculate(secret, guess);
        tally.pairs += 1;
        if feedback.is_win() {
            tally.wins += 1;
        }
        tally.correct_distribution[feedback.count(LetterFeedback::Correct)] += 1;
        if let Some(violation) = check_pair(secret, guess, &feedback) {
            tally.violations.push(violation);
        }
    }
    tally
}

/// Check one result without re-running the two-pass algorithm
///
/// - Correct exactly where the letters agree
/// - Win iff the words are equal
/// - For every letter, Correct + Present hits equal
///   `min(copies in guess, copies in secret)`
fn check_pair(secret: &Word, guess: &Word, feedback: &Feedback) -> Option<String> {
    let letters = feedback.letters();

    for i in 0..WORD_LENGTH {
        let same = secret.letter_at(i) == guess.letter_at(i);
        if same != (letters[i] == LetterFeedback::Correct) {
            return Some(format!("{secret}/{guess}: position {i} misclassified"));
        }
    }

    if feedback.is_win() != (secret == guess) {
        return Some(format!("{secret}/{guess}: win flag wrong"));
    }

    let mut secret_counts: FxHashMap<u8, usize> = FxHashMap::default();
    for &b in secret.letters() {
        *secret_counts.entry(b).or_default() += 1;
    }
    let mut guess_counts: FxHashMap<u8, usize> = FxHashMap::default();
    let mut hits: FxHashMap<u8, usize> = FxHashMap::default();
    for (i, &b) in guess.letters().iter().enumerate() {
        *guess_counts.entry(b).or_default() += 1;
        if letters[i] != LetterFeedback::Absent {
            *hits.entry(b).or_default() += 1;
        }
    }

    for (letter, &in_guess) in &guess_counts {
        let expected = in_guess.min(secret_counts.get(letter).copied().unwrap_or(0));
        let actual = hits.get(letter).copied().unwrap_or(0);
        if expected != actual {
            return Some(format!(
                "{secret}/{guess}: letter {} hit {actual} times, expected {expected}",
                char::from(*letter)
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn audit_small_vocabulary_is_clean() {
        let words =
            WordList::load(["level", "elfll", "allow", "lolly", "speed", "erase", "abbey"])
                .unwrap();
        let result = run_audit(&words, None);

        assert_eq!(result.pairs, 49);
        assert_eq!(result.wins, 7);
        assert_eq!(result.correct_distribution[WORD_LENGTH], 7);
        assert_eq!(result.correct_distribution.iter().sum::<usize>(), 49);
        assert!(result.violations.is_empty(), "{:?}", result.violations);
    }

    #[test]
    fn limit_caps_guesses_only() {
        let words = WordList::load(["crane", "slate", "plane", "level"]).unwrap();
        let result = run_audit(&words, Some(2));

        assert_eq!(result.guesses, 2);
        assert_eq!(result.secrets, 4);
        assert_eq!(result.pairs, 8);

        let oversized = run_audit(&words, Some(100));
        assert_eq!(oversized.guesses, 4);
    }

    #[test]
    fn check_pair_flags_surplus_present() {
        // Marks the third L present although LEVEL only has two
        let wrong = Feedback::new([Present, Present, Absent, Present, Correct]);
        let violation = check_pair(&word("level"), &word("elfll"), &wrong);
        assert!(violation.is_some_and(|v| v.contains("letter L")));
    }

    #[test]
    fn check_pair_flags_missing_correct() {
        let wrong = Feedback::new([Absent; WORD_LENGTH]);
        assert!(check_pair(&word("crane"), &word("crane"), &wrong).is_some());
    }

    #[test]
    fn check_pair_accepts_real_feedback() {
        let secret = word("allow");
        let guess = word("lolly");
        let feedback = Feedback::calculate(&secret, &guess);
        assert_eq!(check_pair(&secret, &guess, &feedback), None);
    }
}
