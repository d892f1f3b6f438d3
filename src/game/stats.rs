//! Running win/loss statistics for the current process

use super::{Session, SessionState};
use crate::core::MAX_ATTEMPTS;

/// Totals across finished games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Index `n - 1` counts wins in `n` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl Statistics {
    /// Fold a finished session into the totals
    ///
    /// Sessions still in progress are ignored.
    pub fn record(&mut self, session: &Session<'_>) {
        match session.state() {
            SessionState::Active => {}
            SessionState::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = session
                    .attempts()
                    .len()
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            SessionState::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Win percentage, 0 when no games were played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::vocabulary::WordList;

    fn finished(words: &WordList, guesses: &[&str]) -> Statistics {
        let mut stats = Statistics::default();
        let mut session = Session::with_secret(words, Word::new("crane").unwrap());
        for guess in guesses {
            session.submit(guess).unwrap();
        }
        stats.record(&session);
        stats
    }

    #[test]
    fn records_win_in_distribution() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let stats = finished(&words, &["slate", "crane"]);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, [0, 1, 0, 0, 0, 0]);
        assert!((stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn active_session_is_not_recorded() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let stats = finished(&words, &["slate"]);
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn loss_breaks_streak() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let mut stats = Statistics::default();

        for _ in 0..2 {
            let mut session = Session::with_secret(&words, Word::new("crane").unwrap());
            session.submit("crane").unwrap();
            stats.record(&session);
        }
        let mut session = Session::with_secret(&words, Word::new("crane").unwrap());
        for _ in 0..MAX_ATTEMPTS {
            session.submit("slate").unwrap();
        }
        stats.record(&session);

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution[0], 2);
    }

    #[test]
    fn win_rate_without_games_is_zero() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
