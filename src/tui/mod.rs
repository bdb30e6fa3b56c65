//! TUI front end: a ratatui game card driven by a [`Session`].
//!
//! The App struct holds all TUI state and drives the event loop. Every
//! state change goes through [`App::handle_action`], so the game can be
//! exercised without a terminal.

pub mod event_log;
pub mod help;
pub mod keybindings;
pub mod status;
pub mod theme;

pub use event_log::{EventLevel, EventLog};
pub use help::HelpScreen;
pub use keybindings::{map_key, Action};
pub use status::{LoadStatus, StatusInfo};

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::dsl::{Compiler, DEFAULT_TITLE};
use crate::runtime::{Outcome, Session};
use crate::source::load_script;
use theme::Theme;

const MAX_HEARTS: u64 = 10;
const NO_TARGET: &str = "No level target loaded. Use Ctrl-R to reload file.";

/// Where the App reads its program from on every (re)load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramSource {
    File(PathBuf),
    Inline(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Info,
    Success,
    Error,
}

/// Main TUI application state.
pub struct App {
    source: ProgramSource,
    session: Option<Session>,
    title: String,
    input: String,
    feedback: String,
    feedback_kind: FeedbackKind,
    pub help_screen: HelpScreen,
    pub event_log: EventLog,
    pub event_log_visible: bool,
    pub status: StatusInfo,
    pub theme: Theme,
    themes: Vec<Theme>,
    show_hearts: bool,
    help_height: usize,
    pub should_quit: bool,
}

impl App {
    /// Create the app and load the program once.
    pub fn new(source: ProgramSource, settings: &Settings) -> Self {
        let theme = theme::load_theme(settings.theme.as_deref());
        let script_path = match &source {
            ProgramSource::File(path) => Some(path.clone()),
            ProgramSource::Inline(_) => None,
        };
        let mut app = Self {
            source,
            session: None,
            title: DEFAULT_TITLE.to_string(),
            input: String::new(),
            feedback: String::new(),
            feedback_kind: FeedbackKind::Info,
            help_screen: HelpScreen::new(),
            event_log: EventLog::default(),
            event_log_visible: false,
            status: StatusInfo {
                script_path,
                load_status: LoadStatus::Idle,
                theme_name: theme.name.clone(),
            },
            theme,
            themes: theme::builtin::all_builtins(),
            show_hearts: settings.show_hearts,
            help_height: 10,
            should_quit: false,
        };
        app.reload();
        app
    }

    /// Re-read and re-parse the program, restarting play from level one.
    pub fn reload(&mut self) {
        self.input.clear();
        self.session = None;

        let loaded = match &self.source {
            ProgramSource::File(path) => load_script(path).map_err(|e| format!("Error: {e}")),
            ProgramSource::Inline(text) => Ok(text.clone()),
        };
        let text = match loaded {
            Ok(text) => text,
            Err(message) => {
                self.load_failed(message);
                return;
            }
        };

        let definition = match Compiler::parse(&text) {
            Ok(definition) => definition,
            Err(e) => {
                self.load_failed(format!("Compiler Error: {e}"));
                return;
            }
        };

        self.title = definition.display_title().to_string();
        if !definition.has_playable_levels() {
            info!("program has no playable levels");
            self.status.load_status = LoadStatus::NoLevels;
            self.event_log.info("Loaded program without levels");
            self.set_feedback(FeedbackKind::Error, NO_TARGET);
            return;
        }

        let session = Session::new(definition);
        info!(levels = session.level_count(), "program loaded");
        self.status.load_status = LoadStatus::Loaded {
            levels: session.level_count(),
        };
        self.event_log.info(format!(
            "Loaded '{}' with {} level(s)",
            self.title,
            session.level_count()
        ));
        let missing_target = session.is_missing_target();
        self.session = Some(session);
        if missing_target {
            self.set_feedback(FeedbackKind::Error, NO_TARGET);
        } else {
            self.set_feedback(FeedbackKind::Info, "Game loaded. Good luck!");
        }
    }

    fn load_failed(&mut self, message: String) {
        warn!(%message, "load failed");
        self.title = DEFAULT_TITLE.to_string();
        self.status.load_status = LoadStatus::Error(message.clone());
        self.event_log.error(message.clone());
        self.set_feedback(FeedbackKind::Error, message);
    }

    fn set_feedback(&mut self, kind: FeedbackKind, text: impl Into<String>) {
        self.feedback_kind = kind;
        self.feedback = text.into();
    }

    /// Apply an action to app state.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => {
                if self.help_screen.visible {
                    self.help_screen.hide();
                } else if self.event_log_visible {
                    self.event_log_visible = false;
                } else {
                    self.should_quit = true;
                }
            }
            Action::ToggleHelp => self.help_screen.toggle(),
            Action::ToggleEventLog => self.event_log_visible = !self.event_log_visible,
            Action::HelpScrollUp => self.help_screen.scroll_up(),
            Action::HelpScrollDown => self.help_screen.scroll_down(self.help_height),
            Action::CycleTheme => {
                self.theme = theme::cycle_theme(&self.theme, &self.themes);
                self.status.theme_name = self.theme.name.clone();
                debug!(theme = %self.theme.name, "theme changed");
            }
            Action::Reload => {
                self.event_log.info("Reload requested");
                self.reload();
            }
            Action::Submit => self.submit(),
            Action::InputChar(c) => {
                if self.accepting_input() {
                    self.input.push(c);
                }
            }
            Action::InputBackspace => {
                self.input.pop();
            }
            Action::InputClear => self.input.clear(),
        }
    }

    /// Whether typed characters go into the guess line.
    pub fn accepting_input(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.outcome() == Outcome::InProgress && !s.is_missing_target())
    }

    fn submit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.set_feedback(FeedbackKind::Error, NO_TARGET);
            return;
        };

        match session.outcome() {
            Outcome::GameOver => {
                self.set_feedback(FeedbackKind::Error, "GAME OVER. Ctrl-R to play again.");
                return;
            }
            Outcome::AllLevelsWon => {
                self.set_feedback(
                    FeedbackKind::Success,
                    "You finished all levels! Ctrl-R to play again.",
                );
                return;
            }
            Outcome::LevelWon | Outcome::InProgress => {}
        }
        if session.is_missing_target() {
            self.input.clear();
            self.set_feedback(FeedbackKind::Error, NO_TARGET);
            return;
        }

        let guess = std::mem::take(&mut self.input);
        if guess.trim().is_empty() {
            self.set_feedback(FeedbackKind::Error, "Please type a guess!");
            return;
        }

        let answer = session.current_target().unwrap_or("").to_string();
        match session.submit_guess(&guess) {
            Outcome::LevelWon => match session.advance() {
                Outcome::InProgress if session.is_missing_target() => {
                    self.set_feedback(FeedbackKind::Error, NO_TARGET)
                }
                Outcome::InProgress => self.set_feedback(
                    FeedbackKind::Success,
                    format!(">>> CORRECT! The answer was {answer}. New level loaded!"),
                ),
                _ => self.set_feedback(
                    FeedbackKind::Success,
                    "You finished all levels! Ctrl-R to play again.",
                ),
            },
            Outcome::InProgress => self.set_feedback(FeedbackKind::Error, ">>> WRONG! Try again!"),
            Outcome::GameOver => {
                self.event_log.info(format!("Game over on '{answer}'"));
                self.set_feedback(
                    FeedbackKind::Error,
                    format!("GAME OVER. The answer was {answer}. Ctrl-R to play again."),
                );
            }
            Outcome::AllLevelsWon => {}
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn feedback_kind(&self) -> FeedbackKind {
        self.feedback_kind
    }

    /// "Level: n of total" using the declared level number, or "Level: -".
    pub fn level_display(&self) -> String {
        match self.session.as_ref().and_then(|s| {
            s.current_level()
                .map(|level| (level.level_number, s.level_count()))
        }) {
            Some((number, total)) => format!("Level: {number} of {total}"),
            None => "Level: -".to_string(),
        }
    }

    pub fn hint_display(&self) -> String {
        let hint = self
            .session
            .as_ref()
            .and_then(|s| s.current_hint())
            .unwrap_or("");
        format!("Hint: {hint}")
    }

    pub fn lives_display(&self) -> String {
        let lives = self.session.as_ref().map_or(0, |s| s.lives_remaining());
        if self.show_hearts && lives > 0 {
            let hearts = vec!["\u{2665}"; lives.min(MAX_HEARTS) as usize].join(" ");
            format!("Lives: {lives}  {hearts}")
        } else {
            format!("Lives: {lives}")
        }
    }

    /// Render the full TUI layout.
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg).fg(self.theme.fg)),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Game card
                Constraint::Length(1), // Tip
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_card(frame, chunks[1]);

        let tip = Paragraph::new("Tip: Press Enter to submit your guess. F1 for help.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.muted));
        frame.render_widget(tip, chunks[2]);

        self.draw_status(frame, chunks[3]);

        if self.event_log_visible {
            self.draw_event_log(frame, size);
        }

        // Help overlay (rendered on top of everything)
        if self.help_screen.visible {
            self.draw_help(frame, size);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(Span::styled(
            DEFAULT_TITLE,
            Style::default()
                .fg(self.theme.heading)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(self.theme.border)),
        );
        frame.render_widget(header, area);
    }

    fn draw_card(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let width = area.width.min(64);
        let card = Rect::new(
            area.x + (area.width - width) / 2,
            area.y,
            width,
            area.height,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .style(Style::default().bg(theme.card_bg).fg(theme.card_fg));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let feedback_color = match self.feedback_kind {
            FeedbackKind::Info => theme.feedback_info,
            FeedbackKind::Success => theme.feedback_ok,
            FeedbackKind::Error => theme.feedback_err,
        };

        let input_line = if self.accepting_input() {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme.muted)),
                Span::styled(self.input.as_str(), Style::default().fg(theme.input_fg)),
                Span::styled("\u{2588}", Style::default().fg(theme.input_cursor)),
            ])
        } else {
            Line::from(Span::styled("> (input disabled)", Style::default().fg(theme.muted)))
        };

        let lives = self.lives_display();
        let (label, hearts) = match lives.split_once("  ") {
            Some((label, hearts)) => (label.to_string(), hearts.to_string()),
            None => (lives, String::new()),
        };

        let lines = vec![
            Line::from(Span::styled(
                self.title.as_str(),
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.level_display(), Style::default().fg(theme.muted))),
            Line::from(""),
            Line::from(Span::styled(self.hint_display(), Style::default().fg(theme.hint))),
            Line::from(vec![
                Span::raw(label),
                Span::raw("  "),
                Span::styled(hearts, Style::default().fg(theme.hearts)),
            ]),
            Line::from(""),
            input_line,
            Line::from(""),
            Line::from(Span::styled(
                self.feedback.as_str(),
                Style::default().fg(feedback_color),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn draw_help(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered(area, 70, 70, 50, 15);

        let block = Block::default()
            .style(Style::default().bg(Color::Black))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .title(" Help (F1 or Esc to close) ");
        let inner = block.inner(overlay);
        frame.render_widget(Clear, overlay);
        frame.render_widget(block, overlay);
        self.help_height = inner.height as usize;

        let lines: Vec<Line> = self
            .help_screen
            .lines()
            .iter()
            .skip(self.help_screen.scroll_offset)
            .take(inner.height as usize)
            .map(|hl| {
                let color = if hl.is_header {
                    self.theme.help_key
                } else {
                    self.theme.help_desc
                };
                Line::from(Span::styled(hl.text.as_str(), Style::default().fg(color)))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_event_log(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered(area, 70, 50, 50, 10);

        let block = Block::default()
            .style(Style::default().bg(Color::Black))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .title(format!(
                " Event Log [{}] (Ctrl-L or Esc to close) ",
                self.event_log.len()
            ));
        let inner = block.inner(overlay);
        frame.render_widget(Clear, overlay);
        frame.render_widget(block, overlay);

        if self.event_log.is_empty() {
            let paragraph = Paragraph::new("(no events recorded)")
                .style(Style::default().fg(self.theme.muted));
            frame.render_widget(paragraph, inner);
            return;
        }

        let theme = &self.theme;
        let lines: Vec<Line> = self
            .event_log
            .recent(inner.height as usize)
            .into_iter()
            .map(|entry| {
                let elapsed = entry
                    .timestamp
                    .elapsed()
                    .map(|d| format!("{:.0}s ago", d.as_secs_f64()))
                    .unwrap_or_else(|_| "?".to_string());
                let color = match entry.level {
                    EventLevel::Info => theme.help_desc,
                    EventLevel::Error => theme.feedback_err,
                };
                Line::from(vec![
                    Span::styled(format!("[{elapsed}] "), Style::default().fg(theme.muted)),
                    Span::styled(entry.message.as_str(), Style::default().fg(color)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let load_color = match self.status.load_status {
            LoadStatus::Loaded { .. } => theme.feedback_ok,
            LoadStatus::Error(_) | LoadStatus::NoLevels => theme.feedback_err,
            LoadStatus::Idle => theme.muted,
        };

        let errors = self.event_log.error_count();
        let error_indicator = if errors > 0 {
            Span::styled(format!(" ERR:{errors} "), Style::default().fg(theme.feedback_err))
        } else {
            Span::raw("")
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.status.script_display()),
                Style::default()
                    .fg(theme.status_accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", self.status.load_display()),
                if self.status.is_error() {
                    Style::default().fg(load_color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(load_color)
                },
            ),
            error_indicator,
            Span::raw(format!(" theme:{} ", self.status.theme_name)),
            Span::raw(" Ctrl-R reload  Ctrl-Q quit "),
        ]);

        let paragraph =
            Paragraph::new(line).style(Style::default().bg(theme.status_bg).fg(theme.status_fg));
        frame.render_widget(paragraph, area);
    }

    /// Main event loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if event::poll(Duration::from_millis(100))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = map_key(key, self.help_screen.visible) {
                            self.handle_action(action);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Take over the terminal, play until the user quits, then restore it.
pub fn run_tui(source: ProgramSource, settings: &Settings) -> io::Result<()> {
    let mut app = App::new(source, settings);
    let mut terminal = ratatui::try_init()?;
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

/// A rect of `pct_w`% by `pct_h`% centered in `area`, no smaller than
/// `min_w` by `min_h` (clamped to `area`).
fn centered(area: Rect, pct_w: u16, pct_h: u16, min_w: u16, min_h: u16) -> Rect {
    let scale = |len: u16, pct: u16| (u32::from(len) * u32::from(pct) / 100) as u16;
    let width = scale(area.width, pct_w).max(min_w).min(area.width);
    let height = scale(area.height, pct_h).max(min_h).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
