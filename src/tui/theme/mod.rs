//! Theme system: configurable color schemes for the TUI.

pub mod builtin;
pub mod config;

use ratatui::style::Color;

/// A complete color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Background & main text
    pub bg: Color,
    pub fg: Color,

    // Game card
    pub card_bg: Color,
    pub card_fg: Color,
    pub heading: Color,
    pub hint: Color,
    pub hearts: Color,
    pub muted: Color,

    // Guess line
    pub input_fg: Color,
    pub input_cursor: Color,

    // Feedback
    pub feedback_ok: Color,
    pub feedback_err: Color,
    pub feedback_info: Color,

    // Status bar
    pub status_fg: Color,
    pub status_bg: Color,
    pub status_accent: Color,

    // Help
    pub help_key: Color,
    pub help_desc: Color,

    // Borders & chrome
    pub border: Color,
    pub border_focused: Color,
}

/// Load a theme.
///
/// A `~/.cgscript/theme.yaml` wins; otherwise the named builtin, then the
/// default.
pub fn load_theme(preferred: Option<&str>) -> Theme {
    config::load_theme_from_yaml()
        .or_else(|| preferred.and_then(builtin::by_name))
        .unwrap_or_else(builtin::default)
}

/// Cycle to the next theme in the list, wrapping around.
pub fn cycle_theme(current: &Theme, themes: &[Theme]) -> Theme {
    if themes.is_empty() {
        return current.clone();
    }
    let idx = themes
        .iter()
        .position(|t| t.name == current.name)
        .map(|i| (i + 1) % themes.len())
        .unwrap_or(0);
    themes[idx].clone()
}
