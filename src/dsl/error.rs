//! Error types for the game-script front end.

use std::fmt;

use super::token::TokenKind;

/// An error that aborted lexing, parsing, or a `SOLVE` run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    pub kind: ErrorKind,
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// A character that starts no token.
    IllegalCharacter(char),
    /// An identifier outside the keyword set.
    UnknownKeyword(String),
    /// A digit run that does not fit in a `u64`.
    InvalidInteger(String),
    /// A token of the wrong kind where one of `expected` was required.
    Syntax {
        expected: Vec<TokenKind>,
        found: TokenKind,
    },
    /// The `SOLVE` host failed (for example, input closed mid-game).
    Host(String),
}

impl CompileError {
    pub fn lex(kind: ErrorKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    pub fn syntax(expected: Vec<TokenKind>, found: TokenKind, line: usize, col: usize) -> Self {
        Self {
            kind: ErrorKind::Syntax { expected, found },
            line,
            col,
        }
    }

    pub fn host(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind: ErrorKind::Host(message.into()),
            line,
            col,
        }
    }

    /// Whether this error came from the lexer.
    pub fn is_lex(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::IllegalCharacter(_)
                | ErrorKind::UnknownKeyword(_)
                | ErrorKind::InvalidInteger(_)
        )
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter(ch) => write!(f, "Illegal Character: {ch}"),
            Self::UnknownKeyword(word) => write!(f, "Unknown Keyword: {word}"),
            Self::InvalidInteger(digits) => write!(f, "Invalid Integer: {digits}"),
            Self::Syntax { expected, found } => {
                if expected.len() == 1 {
                    write!(f, "Syntax Error: Expected {}, got {found}", expected[0])
                } else {
                    let names: Vec<String> = expected.iter().map(|k| k.to_string()).collect();
                    write!(
                        f,
                        "Syntax Error: Expected one of {}, got {found}",
                        names.join(", ")
                    )
                }
            }
            Self::Host(message) => write!(f, "Runtime Error: {message}"),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.line, self.col, self.kind)
    }
}

impl std::error::Error for CompileError {}
