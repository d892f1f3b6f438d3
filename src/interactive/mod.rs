//! Interactive TUI interface
//!
//! Terminal game board built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, FLASH_DURATION, Message, MessageStyle, run_tui};
