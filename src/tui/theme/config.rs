//! Theme YAML config: load a custom theme from ~/.cgscript/theme.yaml.

use ratatui::style::Color;
use serde::Deserialize;
use tracing::warn;

use super::Theme;

/// Intermediate YAML representation. Every field is optional; `base`
/// names the builtin that fills the gaps.
#[derive(Debug, Deserialize)]
struct ThemeConfig {
    name: Option<String>,
    base: Option<String>,

    bg: Option<String>,
    fg: Option<String>,

    card_bg: Option<String>,
    card_fg: Option<String>,
    heading: Option<String>,
    hint: Option<String>,
    hearts: Option<String>,
    muted: Option<String>,

    input_fg: Option<String>,
    input_cursor: Option<String>,

    feedback_ok: Option<String>,
    feedback_err: Option<String>,
    feedback_info: Option<String>,

    status_fg: Option<String>,
    status_bg: Option<String>,
    status_accent: Option<String>,

    help_key: Option<String>,
    help_desc: Option<String>,

    border: Option<String>,
    border_focused: Option<String>,
}

/// Parse a color string: "#RRGGBB" hex or named color.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

/// Load a custom theme from ~/.cgscript/theme.yaml.
/// Returns None if the file doesn't exist or can't be parsed.
pub fn load_theme_from_yaml() -> Option<Theme> {
    let path = crate::config::config_dir()?.join("theme.yaml");
    let content = std::fs::read_to_string(&path).ok()?;
    let theme = parse_theme_yaml(&content);
    if theme.is_none() {
        warn!(path = %path.display(), "ignoring unparsable theme file");
    }
    theme
}

/// Parse a YAML string into a Theme, filling missing fields from the base.
fn parse_theme_yaml(yaml: &str) -> Option<Theme> {
    let config: ThemeConfig = serde_yaml::from_str(yaml).ok()?;
    let d = config
        .base
        .as_deref()
        .and_then(super::builtin::by_name)
        .unwrap_or_else(super::builtin::default);

    let color_or = |opt: Option<String>, fallback: Color| -> Color {
        opt.and_then(|s| parse_color(&s)).unwrap_or(fallback)
    };

    Some(Theme {
        name: config.name.unwrap_or_else(|| "Custom".to_string()),

        bg: color_or(config.bg, d.bg),
        fg: color_or(config.fg, d.fg),

        card_bg: color_or(config.card_bg, d.card_bg),
        card_fg: color_or(config.card_fg, d.card_fg),
        heading: color_or(config.heading, d.heading),
        hint: color_or(config.hint, d.hint),
        hearts: color_or(config.hearts, d.hearts),
        muted: color_or(config.muted, d.muted),

        input_fg: color_or(config.input_fg, d.input_fg),
        input_cursor: color_or(config.input_cursor, d.input_cursor),

        feedback_ok: color_or(config.feedback_ok, d.feedback_ok),
        feedback_err: color_or(config.feedback_err, d.feedback_err),
        feedback_info: color_or(config.feedback_info, d.feedback_info),

        status_fg: color_or(config.status_fg, d.status_fg),
        status_bg: color_or(config.status_bg, d.status_bg),
        status_accent: color_or(config.status_accent, d.status_accent),

        help_key: color_or(config.help_key, d.help_key),
        help_desc: color_or(config.help_desc, d.help_desc),

        border: color_or(config.border, d.border),
        border_focused: color_or(config.border_focused, d.border_focused),
    })
}
