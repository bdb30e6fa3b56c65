//! Built-in themes.

use ratatui::style::Color;

use super::Theme;

/// Default theme: terminal colors on the terminal background.
pub fn default() -> Theme {
    Theme {
        name: "Default".to_string(),

        bg: Color::Reset,
        fg: Color::White,

        card_bg: Color::Reset,
        card_fg: Color::White,
        heading: Color::Cyan,
        hint: Color::LightYellow,
        hearts: Color::Red,
        muted: Color::DarkGray,

        input_fg: Color::White,
        input_cursor: Color::Yellow,

        feedback_ok: Color::Green,
        feedback_err: Color::Red,
        feedback_info: Color::White,

        status_fg: Color::White,
        status_bg: Color::DarkGray,
        status_accent: Color::Cyan,

        help_key: Color::Yellow,
        help_desc: Color::White,

        border: Color::White,
        border_focused: Color::Cyan,
    }
}

/// Papaya: warm light palette (papaya whip, cornsilk, coral).
pub fn papaya() -> Theme {
    Theme {
        name: "Papaya".to_string(),

        bg: Color::Rgb(255, 239, 213), // papaya whip
        fg: Color::Rgb(40, 40, 40),

        card_bg: Color::Rgb(255, 248, 220), // cornsilk
        card_fg: Color::Black,
        heading: Color::Rgb(255, 127, 80), // coral
        hint: Color::Rgb(90, 60, 20),
        hearts: Color::Rgb(220, 20, 60),
        muted: Color::Rgb(107, 107, 107),

        input_fg: Color::Black,
        input_cursor: Color::Rgb(255, 127, 80),

        feedback_ok: Color::Rgb(34, 139, 34),
        feedback_err: Color::Rgb(178, 34, 34),
        feedback_info: Color::Black,

        status_fg: Color::Black,
        status_bg: Color::Rgb(255, 218, 185),
        status_accent: Color::Rgb(255, 127, 80),

        help_key: Color::Rgb(255, 127, 80),
        help_desc: Color::Black,

        border: Color::Rgb(205, 170, 125),
        border_focused: Color::Rgb(255, 127, 80),
    }
}

/// Mono: no color beyond the terminal defaults.
pub fn mono() -> Theme {
    Theme {
        name: "Mono".to_string(),

        bg: Color::Reset,
        fg: Color::Reset,

        card_bg: Color::Reset,
        card_fg: Color::Reset,
        heading: Color::White,
        hint: Color::Reset,
        hearts: Color::White,
        muted: Color::Gray,

        input_fg: Color::Reset,
        input_cursor: Color::White,

        feedback_ok: Color::White,
        feedback_err: Color::White,
        feedback_info: Color::Reset,

        status_fg: Color::Black,
        status_bg: Color::Gray,
        status_accent: Color::Black,

        help_key: Color::White,
        help_desc: Color::Reset,

        border: Color::Gray,
        border_focused: Color::White,
    }
}

/// All builtins in cycling order.
pub fn all_builtins() -> Vec<Theme> {
    vec![default(), papaya(), mono()]
}

/// Look up a builtin by name, ignoring case.
pub fn by_name(name: &str) -> Option<Theme> {
    all_builtins()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}
