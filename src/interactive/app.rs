//! TUI application state and logic

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{Session, SessionState, Statistics, filter_input};
use crate::vocabulary::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long rejected input stays red
pub const FLASH_DURATION: Duration = Duration::from_millis(300);

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Input is drawn in red until this instant
    pub flash_until: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a WordList, mut rng: StdRng) -> Self {
        let session = Session::new(vocabulary, &mut rng);

        Self {
            session,
            rng,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries. Enter submits."
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            flash_until: None,
        }
    }

    /// Feed typed or pasted text through the letter filter
    pub fn type_text(&mut self, text: &str) {
        if self.session.state().is_over() {
            return;
        }
        filter_input(&mut self.input_buffer, text);
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Enter: submit the buffer, or start a new game once this one is over
    pub fn submit(&mut self, now: Instant) {
        if self.session.state().is_over() {
            self.new_game();
            return;
        }

        if self.input_buffer.len() < WORD_LENGTH {
            self.reject("Not enough letters", now);
            return;
        }

        match self.session.submit(&self.input_buffer) {
            Ok(_) => {
                self.input_buffer.clear();
                self.flash_until = None;
                self.after_guess();
            }
            Err(err) if err.is_recoverable() => self.reject(&err.to_string(), now),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn after_guess(&mut self) {
        match self.session.state() {
            SessionState::Active => {}
            SessionState::Won => {
                self.stats.record(&self.session);
                let celebration = match self.session.attempts().len() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
            SessionState::Lost => {
                self.stats.record(&self.session);
                if let Some(secret) = self.session.revealed_secret() {
                    self.add_message(
                        &format!("Out of guesses! The word was {secret}"),
                        MessageStyle::Error,
                    );
                }
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
        }
    }

    fn reject(&mut self, reason: &str, now: Instant) {
        self.flash_until = Some(now + FLASH_DURATION);
        self.add_message(reason, MessageStyle::Error);
    }

    /// Start over once the current game has ended
    pub fn new_game(&mut self) {
        if let Err(err) = self.session.restart(&mut self.rng) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();
        self.flash_until = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.type_text(c.encode_utf8(&mut [0; 4]));
            }
            KeyCode::Backspace => {
                self.backspace();
            }
            KeyCode::Enter => {
                self.submit(now);
            }
            _ => {}
        }
    }

    #[must_use]
    pub fn is_flashing(&self, now: Instant) -> bool {
        self.flash_until.is_some_and(|until| now < until)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Poll so the invalid-input flash clears without a keypress
    let tick = Duration::from_millis(50);

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;

        if !event::poll(tick)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;

    fn app(words: &WordList) -> App<'_> {
        App::new(words, StdRng::seed_from_u64(0))
    }

    #[test]
    fn typing_is_filtered_and_capped() {
        let words = WordList::load(["crane"]).unwrap();
        let mut app = app(&words);

        app.type_text("c");
        app.type_text("1");
        app.type_text("rane");
        app.type_text("s");
        assert_eq!(app.input_buffer, "CRANE");

        app.backspace();
        assert_eq!(app.input_buffer, "CRAN");
    }

    #[test]
    fn short_guess_flashes_without_consuming_attempt() {
        let words = WordList::load(["crane"]).unwrap();
        let mut app = app(&words);
        let now = Instant::now();

        app.type_text("cra");
        app.submit(now);

        assert!(app.is_flashing(now));
        assert!(!app.is_flashing(now + FLASH_DURATION));
        assert!(app.session.attempts().is_empty());
        assert_eq!(app.input_buffer, "CRA");
    }

    #[test]
    fn unknown_word_flashes() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let mut app = app(&words);
        let now = Instant::now();

        app.type_text("zebra");
        app.submit(now);

        assert!(app.is_flashing(now));
        assert!(app.session.attempts().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("ZEBRA"));
    }

    #[test]
    fn win_records_stats_and_enter_restarts() {
        let words = WordList::load(["crane"]).unwrap();
        let mut app = app(&words);
        let now = Instant::now();

        app.type_text("crane");
        app.submit(now);
        assert_eq!(app.session.state(), SessionState::Won);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.input_buffer.is_empty());

        // Typing is ignored once the game is over
        app.type_text("s");
        assert!(app.input_buffer.is_empty());

        app.submit(now);
        assert_eq!(app.session.state(), SessionState::Active);
        assert!(app.session.attempts().is_empty());
    }

    #[test]
    fn modified_keys_do_not_type() {
        let words = WordList::load(["crane"]).unwrap();
        let mut app = app(&words);
        let now = Instant::now();

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL), now);
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT), now);
        assert!(app.input_buffer.is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT), now);
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE), now);
        assert_eq!(app.input_buffer, "CR");
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
        assert!(app.should_quit);
    }

    #[test]
    fn new_game_refused_mid_game() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let mut app = app(&words);
        app.session = Session::with_secret(&words, Word::new("crane").unwrap());
        let now = Instant::now();

        app.type_text("slate");
        app.submit(now);
        let played = app.session.attempts().len();
        app.new_game();

        assert_eq!(app.session.attempts().len(), played);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.stats, Statistics::default());
    }

    #[test]
    fn messages_are_capped() {
        let words = WordList::load(["crane"]).unwrap();
        let mut app = app(&words);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
