//! Level-by-level play over a parsed [`GameDefinition`].
//!
//! The session owns lives, the level cursor and the outcome. Front ends
//! submit guesses and call [`Session::advance`] after a won level; all
//! presentation stays with them.

use tracing::debug;

use crate::dsl::{GameDefinition, Level};

/// Where the game stands after the last call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// The current level was guessed; call `advance` to move on.
    LevelWon,
    AllLevelsWon,
    GameOver,
}

impl Outcome {
    /// Whether only `reset` can leave this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::AllLevelsWon | Outcome::GameOver)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    definition: GameDefinition,
    levels: Vec<Level>,
    current_level_index: usize,
    lives_remaining: u64,
    outcome: Outcome,
}

impl Session {
    pub fn new(definition: GameDefinition) -> Self {
        let levels = definition.playable_levels();
        let lives_remaining = definition.lives_budget();
        let outcome = if levels.is_empty() {
            Outcome::AllLevelsWon
        } else {
            Outcome::InProgress
        };
        debug!(levels = levels.len(), lives = lives_remaining, "session started");
        Self {
            definition,
            levels,
            current_level_index: 0,
            lives_remaining,
            outcome,
        }
    }

    /// Start over from the first level with a full lives budget.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.definition));
    }

    /// Check a guess against the current target.
    ///
    /// Ignored unless the session is `InProgress`.
    pub fn submit_guess(&mut self, guess: &str) -> Outcome {
        if self.outcome != Outcome::InProgress {
            return self.outcome;
        }

        let target = self.current_target().unwrap_or("");
        if guess_matches(guess, target) {
            debug!(level = self.current_level_index, "level won");
            self.outcome = Outcome::LevelWon;
            return self.outcome;
        }

        self.lives_remaining = self.lives_remaining.saturating_sub(1);
        debug!(lives = self.lives_remaining, "wrong guess");
        if self.lives_remaining == 0 {
            debug!(level = self.current_level_index, "game over");
            self.outcome = Outcome::GameOver;
        }
        self.outcome
    }

    /// Move past a won level. A no-op in every other state.
    pub fn advance(&mut self) -> Outcome {
        if self.outcome != Outcome::LevelWon {
            return self.outcome;
        }

        if self.current_level_index + 1 >= self.levels.len() {
            self.current_level_index = self.levels.len();
            self.outcome = Outcome::AllLevelsWon;
            debug!("all levels won");
        } else {
            self.current_level_index += 1;
            self.lives_remaining = self.definition.lives_budget();
            self.outcome = Outcome::InProgress;
            debug!(level = self.current_level_index, "next level");
        }
        self.outcome
    }

    pub fn definition(&self) -> &GameDefinition {
        &self.definition
    }

    pub fn current_level_index(&self) -> usize {
        self.current_level_index
    }

    pub fn lives_remaining(&self) -> u64 {
        self.lives_remaining
    }

    pub fn lives_budget(&self) -> u64 {
        self.definition.lives_budget()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The level being played, or `None` once every level is won.
    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.current_level_index)
    }

    pub fn current_target(&self) -> Option<&str> {
        self.current_level().and_then(|l| l.target.as_deref())
    }

    /// True while the level in play was declared without a target, so no
    /// guess can ever win it.
    pub fn is_missing_target(&self) -> bool {
        self.outcome == Outcome::InProgress
            && self.current_target().map_or(true, str::is_empty)
    }

    pub fn current_hint(&self) -> Option<&str> {
        self.current_level().and_then(|l| l.hint.as_deref())
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The answer, shown only after the game is lost.
    pub fn revealed_target(&self) -> Option<&str> {
        if self.outcome == Outcome::GameOver {
            Some(self.current_target().unwrap_or(""))
        } else {
            None
        }
    }
}

/// Case-insensitive comparison of trimmed text.
fn guess_matches(guess: &str, target: &str) -> bool {
    guess.trim().to_lowercase() == target.trim().to_lowercase()
}
