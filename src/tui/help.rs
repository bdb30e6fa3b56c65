//! Help screen: modal overlay with the key reference and a script primer.

/// A line in the help screen.
#[derive(Debug, Clone)]
pub struct HelpLine {
    pub text: String,
    pub is_header: bool,
}

#[derive(Debug, Clone)]
pub struct HelpScreen {
    pub visible: bool,
    pub scroll_offset: usize,
    content: Vec<HelpLine>,
}

impl HelpScreen {
    pub fn new() -> Self {
        Self {
            visible: false,
            scroll_offset: 0,
            content: Self::build_content(),
        }
    }

    /// Toggle visibility. Showing always starts at the top.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.scroll_offset = 0;
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down, stopping when the last line is visible.
    pub fn scroll_down(&mut self, max_visible: usize) {
        let max_scroll = self.content.len().saturating_sub(max_visible);
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    pub fn lines(&self) -> &[HelpLine] {
        &self.content
    }

    fn build_content() -> Vec<HelpLine> {
        let mut lines = Vec::new();

        let h = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: true,
        };
        let l = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: false,
        };

        lines.push(h("PLAYING"));
        lines.push(l("  Type         Enter your guess"));
        lines.push(l("  Enter        Submit guess"));
        lines.push(l("  Backspace    Delete last character"));
        lines.push(l("  Ctrl-U       Clear guess"));
        lines.push(l(""));

        lines.push(h("GLOBAL"));
        lines.push(l("  Ctrl-R       Reload script and restart"));
        lines.push(l("  Ctrl-Q       Quit"));
        lines.push(l("  Esc          Close overlay / quit"));
        lines.push(l("  F1           Toggle this help screen"));
        lines.push(l("  Ctrl-L       Toggle event log"));
        lines.push(l("  Ctrl-T       Cycle theme"));
        lines.push(l(""));

        lines.push(h("SCRIPT STATEMENTS"));
        lines.push(l("  GAME \"title\";     Set the game title"));
        lines.push(l("  MAX_LIVES n;      Lives per level"));
        lines.push(l("  LEVEL n;          Start a new level"));
        lines.push(l("  TARGET \"answer\";  Answer for the current level"));
        lines.push(l("  HINT \"text\";      Hint for the current level"));
        lines.push(l("  SOLVE;            Play (terminal run mode only)"));
        lines.push(l("  // comment        Ignored to end of line"));
        lines.push(l(""));

        lines.push(h("TIPS"));
        lines.push(l("  - Guesses ignore case and surrounding spaces"));
        lines.push(l("  - Lives refill at every new level"));
        lines.push(l("  - Edit the script, then Ctrl-R to try it"));

        lines
    }
}

impl Default for HelpScreen {
    fn default() -> Self {
        Self::new()
    }
}
