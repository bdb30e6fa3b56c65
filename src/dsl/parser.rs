//! Parser for the game-script language.
//!
//! A statement-oriented recursive-descent parser that pulls tokens from the
//! [`Lexer`] one at a time and fills in a [`GameDefinition`] as it goes.
//! Exactly one token of lookahead (`current`) is held at any time.
//!
//! The same parser serves two execution modes: `ParseOnly` just builds
//! state, while `RunOnSolve` hands every `SOLVE` statement to a
//! [`ScriptHost`] that plays the level immediately.

use tracing::debug;

use super::error::CompileError;
use super::lexer::Lexer;
use super::program::{GameDefinition, Level};
use super::token::{Token, TokenKind};

/// Statement-level notifications a host may print as they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement<'a> {
    Title(&'a str),
    MaxLives(u64),
    Level(u64),
}

/// What a `SOLVE` statement plays: the most recent target and hint seen
/// anywhere in the program so far, and the lives setting at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveRequest<'a> {
    pub target: &'a str,
    pub hint: &'a str,
    pub max_lives: u64,
}

/// Whether parsing continues after a `SOLVE` was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveFlow {
    Continue,
    /// The player lost; stop executing the program.
    Halt,
}

/// Receiver for immediate-execution callbacks.
pub trait ScriptHost {
    fn announce(&mut self, _announcement: Announcement<'_>) {}

    /// Play one level. An `Err` aborts the whole run.
    fn solve(&mut self, request: &SolveRequest<'_>) -> Result<SolveFlow, String>;
}

/// How `SOLVE` statements are treated.
pub enum ExecutionMode<'h> {
    /// Build program state only; `SOLVE` is a no-op.
    ParseOnly,
    /// Execute each `SOLVE` through the host as soon as it is parsed.
    RunOnSolve(&'h mut dyn ScriptHost),
}

/// Result of a successful parse (and, in `RunOnSolve` mode, execution).
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub definition: GameDefinition,
    pub solves_run: usize,
    /// A `SOLVE` ended in defeat and the remaining statements were skipped.
    pub halted: bool,
}

pub struct Parser<'h> {
    lexer: Lexer,
    current: Token,
    definition: GameDefinition,
    current_level: Option<usize>,
    last_target: String,
    last_hint: String,
    mode: ExecutionMode<'h>,
    solves_run: usize,
    halted: bool,
}

/// Parse (and optionally execute) a complete program.
pub fn parse_program(source: &str, mode: ExecutionMode<'_>) -> Result<RunReport, CompileError> {
    let mut parser = Parser::new(source, mode)?;
    parser.parse()?;
    Ok(parser.finish())
}

impl<'h> Parser<'h> {
    /// Create a parser and read the first token.
    pub fn new(source: &str, mode: ExecutionMode<'h>) -> Result<Self, CompileError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            definition: GameDefinition::default(),
            current_level: None,
            last_target: String::new(),
            last_hint: String::new(),
            mode,
            solves_run: 0,
            halted: false,
        })
    }

    /// Parse statements until end of input or a halting `SOLVE`.
    pub fn parse(&mut self) -> Result<(), CompileError> {
        while !self.is_finished() {
            self.statement()?;
        }
        Ok(())
    }

    /// Whether there is nothing left to execute.
    pub fn is_finished(&self) -> bool {
        self.halted || self.current.kind == TokenKind::EndOfInput
    }

    /// The program state built so far. Still valid after an error.
    pub fn definition(&self) -> &GameDefinition {
        &self.definition
    }

    pub fn finish(self) -> RunReport {
        RunReport {
            definition: self.definition,
            solves_run: self.solves_run,
            halted: self.halted,
        }
    }

    /// Parse and apply a single statement.
    pub fn statement(&mut self) -> Result<(), CompileError> {
        match self.current.kind {
            TokenKind::Game => {
                self.advance()?;
                let title = self.expect_string()?;
                self.expect(TokenKind::Semicolon)?;
                debug!(%title, "GAME");
                self.announce(Announcement::Title(&title));
                self.definition.title = title;
            }
            TokenKind::MaxLives => {
                self.advance()?;
                let lives = self.expect_int()?;
                self.expect(TokenKind::Semicolon)?;
                debug!(lives, "MAX_LIVES");
                self.definition.max_lives = lives;
                self.announce(Announcement::MaxLives(lives));
            }
            TokenKind::Level => {
                self.advance()?;
                let number = self.expect_int()?;
                self.expect(TokenKind::Semicolon)?;
                debug!(number, "LEVEL");
                self.definition.levels.push(Level::new(number));
                self.current_level = Some(self.definition.levels.len() - 1);
                self.announce(Announcement::Level(number));
            }
            TokenKind::Target => {
                self.advance()?;
                let target = self.expect_string()?;
                self.expect(TokenKind::Semicolon)?;
                debug!(level = ?self.current_level, "TARGET");
                match self.current_level {
                    Some(idx) => self.definition.levels[idx].target = Some(target.clone()),
                    None => self.definition.loose_target = Some(target.clone()),
                }
                self.last_target = target;
            }
            TokenKind::Hint => {
                self.advance()?;
                let hint = self.expect_string()?;
                self.expect(TokenKind::Semicolon)?;
                debug!(level = ?self.current_level, "HINT");
                match self.current_level {
                    Some(idx) => self.definition.levels[idx].hint = Some(hint.clone()),
                    None => self.definition.loose_hint = Some(hint.clone()),
                }
                self.last_hint = hint;
            }
            TokenKind::Solve => {
                let (line, col) = (self.current.line, self.current.col);
                self.advance()?;
                self.expect(TokenKind::Semicolon)?;
                self.solve(line, col)?;
            }
            found => {
                return Err(CompileError::syntax(
                    TokenKind::STATEMENT_STARTS.to_vec(),
                    found,
                    self.current.line,
                    self.current.col,
                ));
            }
        }
        Ok(())
    }

    fn solve(&mut self, line: usize, col: usize) -> Result<(), CompileError> {
        let ExecutionMode::RunOnSolve(host) = &mut self.mode else {
            debug!("SOLVE skipped (parse only)");
            return Ok(());
        };

        let request = SolveRequest {
            target: &self.last_target,
            hint: &self.last_hint,
            max_lives: self.definition.max_lives,
        };
        debug!(target = request.target, "SOLVE");
        let flow = host
            .solve(&request)
            .map_err(|message| CompileError::host(message, line, col))?;

        self.solves_run += 1;
        if flow == SolveFlow::Halt {
            debug!("SOLVE halted the program");
            self.halted = true;
        }
        Ok(())
    }

    fn announce(&mut self, announcement: Announcement<'_>) {
        if let ExecutionMode::RunOnSolve(host) = &mut self.mode {
            host.announce(announcement);
        }
    }

    /// Replace the lookahead with the next token, returning the old one.
    fn advance(&mut self) -> Result<Token, CompileError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, CompileError> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(CompileError::syntax(
                vec![kind],
                self.current.kind,
                self.current.line,
                self.current.col,
            ))
        }
    }

    fn expect_string(&mut self) -> Result<String, CompileError> {
        let token = self.expect(TokenKind::StringLiteral)?;
        Ok(token.text().unwrap_or_default().to_string())
    }

    fn expect_int(&mut self) -> Result<u64, CompileError> {
        let token = self.expect(TokenKind::IntLiteral)?;
        Ok(token.int().unwrap_or_default())
    }
}
