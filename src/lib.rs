//! cgscript: a small scripting language for multi-level country-guessing games.

pub mod config;
pub mod dsl;
pub mod logging;
pub mod runtime;
pub mod source;
pub mod tui;
