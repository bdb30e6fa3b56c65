//! Parsed program state: the symbol table the parser fills in.

use serde::{Deserialize, Serialize};

/// Title shown by front ends when a program never sets one.
pub const DEFAULT_TITLE: &str = "Country Guess";

/// One stage of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub level_number: u64,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl Level {
    pub fn new(level_number: u64) -> Self {
        Self {
            level_number,
            target: None,
            hint: None,
        }
    }
}

/// A complete game program.
///
/// `loose_target` / `loose_hint` hold `TARGET` / `HINT` values written
/// while no level was declared (single-level programs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDefinition {
    pub title: String,
    pub max_lives: u64,
    pub levels: Vec<Level>,
    #[serde(default)]
    pub loose_target: Option<String>,
    #[serde(default)]
    pub loose_hint: Option<String>,
}

impl GameDefinition {
    /// Lives granted per level. `MAX_LIVES 0` still plays with one life.
    pub fn lives_budget(&self) -> u64 {
        self.max_lives.max(1)
    }

    /// The levels a session plays, in order.
    ///
    /// Falls back to a single level built from the loose target and hint
    /// when the program declares no `LEVEL`.
    pub fn playable_levels(&self) -> Vec<Level> {
        if !self.levels.is_empty() {
            return self.levels.clone();
        }
        match &self.loose_target {
            Some(target) => vec![Level {
                level_number: 1,
                target: Some(target.clone()),
                hint: self.loose_hint.clone(),
            }],
            None => Vec::new(),
        }
    }

    pub fn has_playable_levels(&self) -> bool {
        !self.levels.is_empty() || self.loose_target.is_some()
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    /// Human-readable overview: title, lives and one line per level.
    /// Targets are never printed.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Title: {}\nLives: {}\n",
            self.display_title(),
            self.max_lives
        );
        let levels = self.playable_levels();
        if levels.is_empty() {
            out.push_str("Levels: none\n");
            return out;
        }
        out.push_str(&format!("Levels: {}\n", levels.len()));
        for level in &levels {
            let mark = |present: bool| if present { "yes" } else { "MISSING" };
            out.push_str(&format!(
                "  LEVEL {}: target {}, hint {}\n",
                level.level_number,
                mark(level.target.is_some()),
                mark(level.hint.is_some()),
            ));
        }
        out
    }
}

impl Default for GameDefinition {
    fn default() -> Self {
        Self {
            title: String::new(),
            max_lives: 1,
            levels: Vec::new(),
            loose_target: None,
            loose_hint: None,
        }
    }
}
