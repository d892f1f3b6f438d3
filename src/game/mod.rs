//! Game sessions
//!
//! A [`Session`] owns one secret and its attempt history; [`Statistics`]
//! accumulates results across restarts.

mod input;
mod session;
mod stats;

pub use input::filter_input;
pub use session::{Attempt, Session, SessionState};
pub use stats::Statistics;
