//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{Session, SessionState, Statistics};
use crate::output::formatters::guess_row;
use crate::output::write_statistics;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the line-based game until the player quits or input ends
///
/// Returns the statistics of the games finished along the way.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, W, G>(
    session: &mut Session<'_>,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle - Simple Mode            ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries."
    )?;
    writeln!(out, "Type 'quit' to exit\n")?;

    let mut stats = Statistics::default();

    loop {
        let turn = session.attempts().len() + 1;
        let Some(line) = prompt(input, out, &format!("Guess {turn}/{MAX_ATTEMPTS}"))? else {
            break;
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            break;
        }

        let attempt = match session.submit(&line) {
            Ok(attempt) => attempt,
            Err(err) if err.is_recoverable() => {
                writeln!(out, "{}", format!("❌ {err}").red())?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        writeln!(out, "  {}", guess_row(&attempt.guess, &attempt.feedback))?;

        match session.state() {
            SessionState::Active => continue,
            SessionState::Won => {
                let tries = session.attempts().len();
                writeln!(
                    out,
                    "\n{}",
                    format!(
                        "🎉 Solved in {tries} {}!",
                        if tries == 1 { "guess" } else { "guesses" }
                    )
                    .green()
                    .bold()
                )?;
            }
            SessionState::Lost => {
                if let Some(secret) = session.revealed_secret() {
                    writeln!(
                        out,
                        "\n{} The word was {}",
                        "💀 Out of guesses!".red().bold(),
                        secret.text().bright_yellow().bold()
                    )?;
                }
            }
        }

        stats.record(session);
        write_statistics(out, &stats)?;

        let again = prompt(input, out, "\nPlay again? (yes/no)")?;
        if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
            session.restart(rng)?;
            writeln!(out, "\n🔄 New game started!\n")?;
        } else {
            break;
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::vocabulary::WordList;
    use rand::{SeedableRng, rngs::StdRng};
    use std::io::Cursor;

    fn play(words: &WordList, secret: &str, script: &str) -> (Statistics, String) {
        colored::control::set_override(false);
        let mut session = Session::with_secret(words, Word::new(secret).unwrap());
        let mut rng = StdRng::seed_from_u64(0);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let stats = run_simple(&mut session, &mut rng, &mut input, &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn invalid_guess_then_win() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let (stats, output) = play(&words, "crane", "cat\nzebra\ncrane\nno\n");

        assert!(output.contains("Guess must be 5 letters, got 3"));
        assert!(output.contains("ZEBRA is not in the word list"));
        assert!(output.contains("Solved in 1 guess!"));
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[0], 1);
    }

    #[test]
    fn six_misses_reveal_the_word() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let script = "slate\n".repeat(MAX_ATTEMPTS) + "no\n";
        let (stats, output) = play(&words, "crane", &script);

        assert!(output.contains("Out of guesses!"));
        assert!(output.contains("The word was CRANE"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn play_again_starts_a_fresh_game() {
        // Single-word vocabulary makes the restarted secret predictable
        let words = WordList::load(["crane"]).unwrap();
        let (stats, output) = play(&words, "crane", "crane\nyes\ncrane\nn\n");

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.max_streak, 2);
        assert!(output.contains("New game started!"));
    }

    #[test]
    fn quit_and_end_of_input_stop_cleanly() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let (stats, output) = play(&words, "crane", "slate\nquit\n");
        assert_eq!(stats, Statistics::default());
        assert!(output.contains("Thanks for playing!"));

        let (stats, _) = play(&words, "crane", "slate\n");
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn game_in_progress_cannot_be_abandoned() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let (stats, output) = play(&words, "crane", "slate\nnew\ncrane\nno\n");

        // "new" is just a bad guess; the attempt counter keeps going
        assert!(output.contains("Guess must be 5 letters, got 3"));
        assert!(!output.contains("New game started!"));
        assert!(output.contains("Solved in 2 guesses!"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }
}
