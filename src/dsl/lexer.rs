//! Lexer for the game-script language.
//!
//! Produces [`Token`]s on demand through [`Lexer::next_token`]. Once the
//! source is exhausted every further call yields `EndOfInput`.

use tracing::warn;

use super::error::{CompileError, ErrorKind};
use super::token::{keyword, Payload, Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        while !self.is_at_end() {
            let ch = self.peek();

            if ch.is_whitespace() {
                self.skip_whitespace();
                continue;
            }

            if ch == '/' && self.peek_next() == Some('/') {
                self.skip_comment();
                continue;
            }

            let line = self.line;
            let col = self.col;

            if ch.is_alphabetic() {
                return self.lex_keyword();
            }
            if ch == '"' {
                return Ok(self.lex_string());
            }
            if ch.is_ascii_digit() {
                return self.lex_integer();
            }
            if ch == ';' {
                self.advance();
                return Ok(Token::new(
                    TokenKind::Semicolon,
                    Some(Payload::Text(";".to_string())),
                    line,
                    col,
                ));
            }

            return Err(CompileError::lex(
                ErrorKind::IllegalCharacter(ch),
                line,
                col,
            ));
        }

        Ok(Token::new(TokenKind::EndOfInput, None, self.line, self.col))
    }

    /// Scan the whole source. The result ends with exactly one `EndOfInput`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Consume one character. A no-op at end of input.
    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    /// Skip a `//` comment through its terminating newline.
    fn skip_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
        // the newline itself; nothing left when the comment ends the file
        self.advance();
    }

    fn lex_keyword(&mut self) -> Result<Token, CompileError> {
        let line = self.line;
        let col = self.col;
        let mut s = String::new();

        while !self.is_at_end() && (self.peek().is_alphanumeric() || self.peek() == '_') {
            s.push(self.peek());
            self.advance();
        }

        match keyword(&s) {
            Some(kind) => Ok(Token::new(kind, Some(Payload::Text(s)), line, col)),
            None => Err(CompileError::lex(ErrorKind::UnknownKeyword(s), line, col)),
        }
    }

    fn lex_string(&mut self) -> Token {
        let line = self.line;
        let col = self.col;
        self.advance(); // consume opening '"'

        let mut s = String::new();
        while !self.is_at_end() && self.peek() != '"' {
            s.push(self.peek());
            self.advance();
        }

        if self.is_at_end() {
            warn!(line, col, "unterminated string literal runs to end of input");
        } else {
            self.advance(); // consume closing '"'
        }

        Token::new(TokenKind::StringLiteral, Some(Payload::Text(s)), line, col)
    }

    fn lex_integer(&mut self) -> Result<Token, CompileError> {
        let line = self.line;
        let col = self.col;
        let mut s = String::new();

        while !self.is_at_end() && self.peek().is_ascii_digit() {
            s.push(self.peek());
            self.advance();
        }

        let value: u64 = s
            .parse()
            .map_err(|_| CompileError::lex(ErrorKind::InvalidInteger(s.clone()), line, col))?;
        Ok(Token::new(
            TokenKind::IntLiteral,
            Some(Payload::Int(value)),
            line,
            col,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lex_game_statement() {
        let mut lexer = Lexer::new(r#"GAME "World Explorer";"#);
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Game);
        assert_eq!(tokens[0].text(), Some("GAME"));
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[1].text(), Some("World Explorer"));
        assert_eq!(tokens[2].kind, TokenKind::Semicolon);
        assert_eq!(tokens[2].text(), Some(";"));
        assert_eq!(tokens[3].kind, TokenKind::EndOfInput);
        assert_eq!(tokens[3].payload, None);
    }

    #[test]
    fn lex_all_keywords() {
        assert_eq!(
            kinds("GAME MAX_LIVES LEVEL TARGET HINT SOLVE"),
            vec![
                TokenKind::Game,
                TokenKind::MaxLives,
                TokenKind::Level,
                TokenKind::Target,
                TokenKind::Hint,
                TokenKind::Solve,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn lex_integer_payload() {
        let mut lexer = Lexer::new("MAX_LIVES 42;");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[1].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[1].int(), Some(42));
    }

    #[test]
    fn lex_integer_overflow() {
        let mut lexer = Lexer::new("LEVEL 99999999999999999999999;");
        let _ = lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert!(err.is_lex());
        assert!(matches!(err.kind, ErrorKind::InvalidInteger(_)));
    }

    #[test]
    fn lex_unknown_keyword() {
        let mut lexer = Lexer::new("GAME FOO;");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Game);
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownKeyword("FOO".to_string()));
        assert_eq!((err.line, err.col), (1, 6));
    }

    #[test]
    fn lex_keywords_are_case_sensitive() {
        let err = Lexer::new("game").next_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownKeyword("game".to_string()));
    }

    #[test]
    fn lex_identifier_with_underscore_and_digits() {
        let err = Lexer::new("LEVEL_2").next_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownKeyword("LEVEL_2".to_string()));
    }

    #[test]
    fn lex_illegal_character() {
        let mut lexer = Lexer::new("SOLVE @");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Solve);
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::IllegalCharacter('@'));
    }

    #[test]
    fn lex_single_slash_is_illegal() {
        let err = Lexer::new("/ SOLVE").next_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::IllegalCharacter('/'));
    }

    #[test]
    fn lex_comment() {
        let src = "// the title\nGAME \"X\"; // trailing\nSOLVE;";
        assert_eq!(
            kinds(src),
            vec![
                TokenKind::Game,
                TokenKind::StringLiteral,
                TokenKind::Semicolon,
                TokenKind::Solve,
                TokenKind::Semicolon,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn lex_comment_at_end_without_newline() {
        assert_eq!(
            kinds("SOLVE; // done"),
            vec![TokenKind::Solve, TokenKind::Semicolon, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn lex_comment_consumes_its_newline_only() {
        let src = "// note\nSOLVE;";
        let tokens = Lexer::new(src).tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Solve);
        assert_eq!((tokens[0].line, tokens[0].col), (2, 1));
    }

    #[test]
    fn lex_string_keeps_inner_text_verbatim() {
        let mut lexer = Lexer::new(r#"HINT "Home of the // Eiffel \ Tower";"#);
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[1].text(), Some(r"Home of the // Eiffel \ Tower"));
    }

    #[test]
    fn lex_unterminated_string_runs_to_end() {
        let mut lexer = Lexer::new("TARGET \"FRANCE;");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[1].text(), Some("FRANCE;"));
        assert_eq!(tokens[2].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn lex_end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("SOLVE");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Solve);
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
        }
    }

    #[test]
    fn lex_empty_input() {
        let tokens = Lexer::new("").tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn lex_whitespace_only() {
        assert_eq!(kinds(" \t\r\n\n  "), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn lex_line_tracking() {
        let tokens = Lexer::new("GAME \"X\";\nMAX_LIVES 3;").tokenize().unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[3].kind, TokenKind::MaxLives);
        assert_eq!((tokens[3].line, tokens[3].col), (2, 1));
        assert_eq!((tokens[4].line, tokens[4].col), (2, 11));
    }

    #[test]
    fn lex_no_whitespace_needed_between_tokens() {
        assert_eq!(
            kinds("LEVEL 1;TARGET\"A\";"),
            vec![
                TokenKind::Level,
                TokenKind::IntLiteral,
                TokenKind::Semicolon,
                TokenKind::Target,
                TokenKind::StringLiteral,
                TokenKind::Semicolon,
                TokenKind::EndOfInput,
            ]
        );
    }
}
