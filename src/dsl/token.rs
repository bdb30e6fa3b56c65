//! Token types for the game-script lexer.

use std::fmt;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub payload: Option<Payload>,
    pub line: usize,
    pub col: usize,
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Game,
    MaxLives,
    Level,
    Target,
    Hint,
    Solve,

    // Literals
    StringLiteral,
    IntLiteral,

    // Delimiters
    Semicolon,

    // Special
    EndOfInput,
}

/// Decoded token payload: literal values, keyword text, or `";"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Int(u64),
}

/// The closed keyword vocabulary. There are no user identifiers.
pub fn keyword(text: &str) -> Option<TokenKind> {
    match text {
        "GAME" => Some(TokenKind::Game),
        "MAX_LIVES" => Some(TokenKind::MaxLives),
        "LEVEL" => Some(TokenKind::Level),
        "TARGET" => Some(TokenKind::Target),
        "HINT" => Some(TokenKind::Hint),
        "SOLVE" => Some(TokenKind::Solve),
        _ => None,
    }
}

impl TokenKind {
    /// Every kind that may begin a statement.
    pub const STATEMENT_STARTS: [TokenKind; 6] = [
        TokenKind::Game,
        TokenKind::MaxLives,
        TokenKind::Level,
        TokenKind::Target,
        TokenKind::Hint,
        TokenKind::Solve,
    ];
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game => write!(f, "GAME"),
            Self::MaxLives => write!(f, "MAX_LIVES"),
            Self::Level => write!(f, "LEVEL"),
            Self::Target => write!(f, "TARGET"),
            Self::Hint => write!(f, "HINT"),
            Self::Solve => write!(f, "SOLVE"),
            Self::StringLiteral => write!(f, "STRING"),
            Self::IntLiteral => write!(f, "INT"),
            Self::Semicolon => write!(f, "SEMICOLON"),
            Self::EndOfInput => write!(f, "EOF"),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, payload: Option<Payload>, line: usize, col: usize) -> Self {
        Self {
            kind,
            payload,
            line,
            col,
        }
    }

    /// The string payload, if this token carries one.
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Some(Payload::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if this token carries one.
    pub fn int(&self) -> Option<u64> {
        match self.payload {
            Some(Payload::Int(n)) => Some(n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_case_sensitive() {
        assert_eq!(keyword("GAME"), Some(TokenKind::Game));
        assert_eq!(keyword("MAX_LIVES"), Some(TokenKind::MaxLives));
        assert_eq!(keyword("game"), None);
        assert_eq!(keyword("Solve"), None);
    }

    #[test]
    fn statement_starts_are_keywords() {
        for kind in TokenKind::STATEMENT_STARTS {
            assert_eq!(keyword(&kind.to_string()), Some(kind));
        }
        assert_eq!(keyword("SEMICOLON"), None);
        assert_eq!(keyword("STRING"), None);
    }

    #[test]
    fn payload_accessors() {
        let s = Token::new(TokenKind::StringLiteral, Some(Payload::Text("x".into())), 1, 1);
        assert_eq!(s.text(), Some("x"));
        assert_eq!(s.int(), None);

        let n = Token::new(TokenKind::IntLiteral, Some(Payload::Int(7)), 1, 1);
        assert_eq!(n.int(), Some(7));
        assert_eq!(n.text(), None);

        let eof = Token::new(TokenKind::EndOfInput, None, 1, 1);
        assert_eq!(eof.text(), None);
        assert_eq!(eof.int(), None);
    }
}
