//! Gameplay runtime: the session state machine and the terminal front ends.

pub mod session;
pub mod terminal;

pub use session::{Outcome, Session};
pub use terminal::{play_session, TerminalHost};
