//! Loading program text from disk.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

/// Default program file, looked up in the working directory.
pub const DEFAULT_SCRIPT: &str = "game.cgs";

/// The program source could not be obtained.
#[derive(Debug)]
pub enum SourceError {
    NotFound(PathBuf),
    /// The file exists but holds nothing except whitespace.
    Empty(PathBuf),
    Io { path: PathBuf, source: io::Error },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path) | Self::Empty(path) | Self::Io { path, .. } => path,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Could not find '{}' file.", path.display()),
            Self::Empty(path) => write!(f, "'{}' is empty.", path.display()),
            Self::Io { path, source } => write!(f, "Could not read '{}': {source}", path.display()),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read a program file.
pub fn load_script(path: &Path) -> Result<String, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound(path.to_path_buf())
        } else {
            SourceError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if text.trim().is_empty() {
        return Err(SourceError::Empty(path.to_path_buf()));
    }

    info!(path = %path.display(), bytes = text.len(), "loaded script");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GAME \"X\";").unwrap();
        let text = load_script(file.path()).unwrap();
        assert_eq!(text, "GAME \"X\";\n");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.cgs");
        let err = load_script(&path).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().starts_with("Could not find '"));
        assert!(err.to_string().ends_with("game.cgs' file."));
    }

    #[test]
    fn blank_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  \n\t\n").unwrap();
        let err = load_script(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Empty(_)));
    }

    #[test]
    fn directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_script(dir.path()).unwrap_err();
        assert!(!matches!(err, SourceError::Empty(_)));
    }
}
