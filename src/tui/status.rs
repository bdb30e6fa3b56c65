//! Status bar: script path, load result and theme.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// `None` when the program came from in-memory source.
    pub script_path: Option<PathBuf>,
    pub load_status: LoadStatus,
    pub theme_name: String,
}

/// Result of the most recent load or reload.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loaded { levels: usize },
    /// Parsed, but there is nothing to play.
    NoLevels,
    Error(String),
    Idle,
}

impl StatusInfo {
    pub fn script_display(&self) -> String {
        match &self.script_path {
            Some(path) => path.display().to_string(),
            None => "<inline>".to_string(),
        }
    }

    pub fn load_display(&self) -> String {
        match &self.load_status {
            LoadStatus::Loaded { levels: 1 } => "OK (1 level)".to_string(),
            LoadStatus::Loaded { levels } => format!("OK ({levels} levels)"),
            LoadStatus::NoLevels => "NO LEVELS".to_string(),
            LoadStatus::Error(_) => "ERROR".to_string(),
            LoadStatus::Idle => "-".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.load_status, LoadStatus::Error(_))
    }
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            script_path: None,
            load_status: LoadStatus::Idle,
            theme_name: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_display() {
        let mut status = StatusInfo::default();
        assert_eq!(status.load_display(), "-");
        status.load_status = LoadStatus::Loaded { levels: 1 };
        assert_eq!(status.load_display(), "OK (1 level)");
        status.load_status = LoadStatus::Loaded { levels: 3 };
        assert_eq!(status.load_display(), "OK (3 levels)");
        status.load_status = LoadStatus::NoLevels;
        assert_eq!(status.load_display(), "NO LEVELS");
        status.load_status = LoadStatus::Error("boom".into());
        assert_eq!(status.load_display(), "ERROR");
        assert!(status.is_error());
    }

    #[test]
    fn script_display() {
        let mut status = StatusInfo::default();
        assert_eq!(status.script_display(), "<inline>");
        status.script_path = Some(PathBuf::from("game.cgs"));
        assert_eq!(status.script_display(), "game.cgs");
    }
}
