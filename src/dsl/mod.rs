//! Game-script front end: source text → tokens → `GameDefinition`.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod program;
pub mod token;

pub use error::{CompileError, ErrorKind};
pub use parser::{
    parse_program, Announcement, ExecutionMode, Parser, RunReport, ScriptHost, SolveFlow,
    SolveRequest,
};
pub use program::{GameDefinition, Level, DEFAULT_TITLE};

/// The game-script compiler.
///
/// Parses source text through lexer → parser into a [`GameDefinition`],
/// optionally playing each `SOLVE` as it is reached.
pub struct Compiler;

impl Compiler {
    /// Parse source into a game definition. `SOLVE` statements are ignored.
    pub fn parse(source: &str) -> Result<GameDefinition, CompileError> {
        parse_program(source, ExecutionMode::ParseOnly).map(|report| report.definition)
    }

    /// Parse source, handing every `SOLVE` to `host` as soon as it is read.
    pub fn run(source: &str, host: &mut dyn ScriptHost) -> Result<RunReport, CompileError> {
        parse_program(source, ExecutionMode::RunOnSolve(host))
    }
}
