//! TUI rendering with ratatui
//!
//! Board, messages and status bar for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterFeedback, MAX_ATTEMPTS, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

const GREEN: Color = Color::Rgb(0x6a, 0xaa, 0x64);
const YELLOW: Color = Color::Rgb(0xc9, 0xb4, 0x58);
const GRAY: Color = Color::Rgb(0x78, 0x7c, 0x7e);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Header
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 2), // Board
            Constraint::Min(4),                             // Messages
            Constraint::Length(3),                          // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, now, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn feedback_color(feedback: LetterFeedback) -> Color {
    match feedback {
        LetterFeedback::Correct => GREEN,
        LetterFeedback::Present => YELLOW,
        LetterFeedback::Absent => GRAY,
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn render_board(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for attempt in app.session.attempts() {
        let spans: Vec<Span> = attempt
            .guess
            .text()
            .chars()
            .zip(attempt.feedback.letters())
            .flat_map(|(letter, &kind)| {
                tile(
                    letter,
                    Style::default()
                        .fg(Color::White)
                        .bg(feedback_color(kind))
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !app.session.state().is_over() {
        let fg = if app.is_flashing(now) {
            Color::Red
        } else {
            Color::White
        };
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let letter = typed.get(i).copied().unwrap_or('_');
                tile(
                    letter,
                    Style::default()
                        .fg(fg)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    while lines.len() < MAX_ATTEMPTS * 2 {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| tile(' ', Style::default().bg(Color::Black)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Attempt {}/{MAX_ATTEMPTS} ",
                (app.session.attempts().len() + 1).min(MAX_ATTEMPTS)
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let streak_text = format!(
        "Streak: {} | Best: {}",
        app.stats.current_streak, app.stats.max_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let remaining_text = format!("Left: {}", app.session.attempts_remaining());
    let remaining = Paragraph::new(remaining_text).alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help_text = if app.session.state().is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Session;
    use crate::vocabulary::WordList;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, app, Instant::now())).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn board_shows_submitted_guess_and_input() {
        let words = WordList::load(["crane", "slate"]).unwrap();
        let mut app = App::new(&words, StdRng::seed_from_u64(0));
        app.session = Session::with_secret(&words, Word::new("crane").unwrap());
        app.type_text("slate");
        app.submit(Instant::now());
        app.type_text("cr");

        let screen = rendered(&app);
        assert!(screen.contains(" S   L   A   T   E "));
        assert!(screen.contains(" C   R   _   _   _ "));
    }

    #[test]
    fn status_bar_offers_new_game_after_end() {
        let words = WordList::load(["crane"]).unwrap();
        let mut app = App::new(&words, StdRng::seed_from_u64(0));
        app.type_text("crane");
        app.submit(Instant::now());

        let screen = rendered(&app);
        assert!(screen.contains("Enter: New Game"));
        assert!(screen.contains("Games: 1"));
    }
}
