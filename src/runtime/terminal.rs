//! Line-oriented terminal front ends.
//!
//! [`TerminalHost`] plays each `SOLVE` as the parser reaches it (the legacy
//! flow), while [`play_session`] walks a whole parsed program level by
//! level. Both are generic over their streams so tests can drive them with
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use super::session::{Outcome, Session};
use crate::dsl::{Announcement, GameDefinition, Level, ScriptHost, SolveFlow, SolveRequest};

const PROMPT: &str = "Enter full country name: ";
const NO_TARGET: &str = "No level target loaded.";

/// A [`ScriptHost`] that talks to the player over a pair of streams.
pub struct TerminalHost<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn play_level(&mut self, request: &SolveRequest<'_>) -> io::Result<SolveFlow> {
        if request.max_lives == 0 {
            writeln!(self.output, "GAME OVER. The answer was {}", request.target)?;
            return Ok(SolveFlow::Halt);
        }

        let mut session = Session::new(GameDefinition {
            max_lives: request.max_lives,
            levels: vec![Level {
                level_number: 1,
                target: Some(request.target.to_string()),
                hint: Some(request.hint.to_string()),
            }],
            ..Default::default()
        });

        loop {
            writeln!(self.output, "HINT: {}", request.hint)?;
            writeln!(self.output, "Lives remaining: {}", session.lives_remaining())?;
            let guess = read_guess(&mut self.input, &mut self.output, PROMPT)?
                .ok_or_else(input_closed)?;

            match session.submit_guess(&guess) {
                Outcome::LevelWon => {
                    writeln!(self.output, ">>> CORRECT! You passed this level. <<<\n")?;
                    return Ok(SolveFlow::Continue);
                }
                Outcome::GameOver => {
                    writeln!(self.output, ">>> WRONG! <<<")?;
                    writeln!(self.output, "GAME OVER. The answer was {}", request.target)?;
                    return Ok(SolveFlow::Halt);
                }
                _ => writeln!(self.output, ">>> WRONG! <<<")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ScriptHost for TerminalHost<R, W> {
    fn announce(&mut self, announcement: Announcement<'_>) {
        let written = match announcement {
            Announcement::Title(title) => writeln!(self.output, "--- Welcome to: {title} ---"),
            Announcement::MaxLives(lives) => writeln!(self.output, "System: Lives set to {lives}"),
            Announcement::Level(number) => writeln!(self.output, "\n[LOADING LEVEL {number}]"),
        };
        if let Err(e) = written {
            warn!(error = %e, "failed to write announcement");
        }
    }

    fn solve(&mut self, request: &SolveRequest<'_>) -> Result<SolveFlow, String> {
        self.play_level(request).map_err(|e| e.to_string())
    }
}

/// Play every level of `session` until the game is won or lost.
///
/// Blank guesses are rejected without costing a life. Running out of input
/// mid-game is an `UnexpectedEof` error.
pub fn play_session<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> io::Result<Outcome> {
    if !session.definition().has_playable_levels() {
        writeln!(output, "{NO_TARGET}")?;
        return Ok(session.outcome());
    }

    writeln!(
        output,
        "--- Welcome to: {} ---",
        session.definition().display_title()
    )?;

    loop {
        match session.outcome() {
            Outcome::InProgress => {}
            Outcome::LevelWon => {
                if session.advance() == Outcome::InProgress && !session.is_missing_target() {
                    writeln!(output, "New level loaded!")?;
                }
                continue;
            }
            Outcome::AllLevelsWon => {
                writeln!(output, "You finished all levels!")?;
                return Ok(Outcome::AllLevelsWon);
            }
            Outcome::GameOver => {
                writeln!(
                    output,
                    "GAME OVER. The answer was {}",
                    session.revealed_target().unwrap_or("")
                )?;
                return Ok(Outcome::GameOver);
            }
        }

        if session.is_missing_target() {
            writeln!(output, "{NO_TARGET}")?;
            return Ok(session.outcome());
        }

        let number = session.current_level().map_or(0, |l| l.level_number);
        writeln!(output, "\nLevel: {number} of {}", session.level_count())?;
        writeln!(output, "HINT: {}", session.current_hint().unwrap_or(""))?;
        writeln!(output, "Lives remaining: {}", session.lives_remaining())?;

        let guess = read_guess(&mut input, &mut output, PROMPT)?.ok_or_else(input_closed)?;
        if guess.trim().is_empty() {
            writeln!(output, "Please type a guess!")?;
            continue;
        }

        match session.submit_guess(&guess) {
            Outcome::LevelWon => writeln!(output, ">>> CORRECT! You passed this level. <<<")?,
            Outcome::InProgress => writeln!(output, ">>> WRONG! Try again!")?,
            Outcome::GameOver => writeln!(output, ">>> WRONG! <<<")?,
            Outcome::AllLevelsWon => {}
        }
    }
}

/// Prompt and read one line. `None` when the input is exhausted.
fn read_guess<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("input closed");
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn input_closed() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
}
