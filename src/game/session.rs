//! One game: a secret, the attempts made against it, and the outcome

use crate::core::{Feedback, GameError, InvalidGuess, MAX_ATTEMPTS, Word, WordError};
use crate::vocabulary::WordList;
use rand::Rng;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Game state owned by a single shell
///
/// Replaces the implicit "current row + answer" pair of a UI with an explicit
/// value. Invalid guesses never change it; the attempt list never exceeds
/// [`MAX_ATTEMPTS`]; once won or lost it refuses guesses until restarted.
#[derive(Debug)]
pub struct Session<'a> {
    vocabulary: &'a WordList,
    secret: Word,
    attempts: Vec<Attempt>,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Start a session with a secret drawn from `vocabulary`
    pub fn new<R: Rng>(vocabulary: &'a WordList, rng: &mut R) -> Self {
        let secret = vocabulary.sample(rng);
        Self::with_secret(vocabulary, secret)
    }

    /// Start a session with a known secret
    ///
    /// `secret` must be a member of `vocabulary`.
    #[must_use]
    pub fn with_secret(vocabulary: &'a WordList, secret: Word) -> Self {
        debug_assert!(
            vocabulary.contains_word(&secret),
            "secret {secret} is not in the vocabulary"
        );
        log::debug!("new session started");
        Self {
            vocabulary,
            secret,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            state: SessionState::Active,
        }
    }

    /// Submit a guess
    ///
    /// # Errors
    /// - `GameError::SessionOver` if the game was already won or lost
    /// - `GameError::InvalidGuess` if the guess is not a five-letter word from
    ///   the vocabulary; no attempt is consumed
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Session, SessionState};
    /// use wordle_game::vocabulary::WordList;
    ///
    /// let words = WordList::load(["crane", "slate"]).unwrap();
    /// let mut session = Session::with_secret(&words, Word::new("crane").unwrap());
    ///
    /// assert!(session.submit("plane").is_err());
    /// let attempt = session.submit("crane").unwrap();
    /// assert!(attempt.feedback.is_win());
    /// assert_eq!(session.state(), SessionState::Won);
    /// ```
    pub fn submit(&mut self, guess: &str) -> Result<Attempt, GameError> {
        if self.state.is_over() {
            return Err(GameError::SessionOver);
        }

        let guess = self.validate(guess.trim())?;
        let feedback = Feedback::calculate(&self.secret, &guess);
        let attempt = Attempt { guess, feedback };
        self.attempts.push(attempt);

        if feedback.is_win() {
            self.state = SessionState::Won;
            log::info!("won in {} attempts", self.attempts.len());
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.state = SessionState::Lost;
            log::info!("lost; secret was {}", self.secret);
        } else {
            log::debug!(
                "attempt {}/{MAX_ATTEMPTS}: {guess} {feedback}",
                self.attempts.len()
            );
        }

        Ok(attempt)
    }

    fn validate(&self, guess: &str) -> Result<Word, InvalidGuess> {
        let word = Word::new(guess).map_err(|err| match err {
            WordError::InvalidLength(len) => InvalidGuess::WrongLength(len),
            WordError::NonAscii | WordError::InvalidCharacters => InvalidGuess::NotALetter,
        })?;

        if self.vocabulary.contains_word(&word) {
            Ok(word)
        } else {
            Err(InvalidGuess::NotInWordList(word))
        }
    }

    /// Clear the attempts and draw a fresh secret
    ///
    /// # Errors
    /// Returns `GameError::GameInProgress` while the game is still active;
    /// the session is left untouched.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if !self.state.is_over() {
            return Err(GameError::GameInProgress);
        }

        self.secret = self.vocabulary.sample(rng);
        self.attempts.clear();
        self.state = SessionState::Active;
        log::debug!("session restarted");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// The secret, once the game has ended
    #[must_use]
    pub fn revealed_secret(&self) -> Option<Word> {
        self.state.is_over().then_some(self.secret)
    }
}
