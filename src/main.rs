//! cgscript: run, play, check or inspect a game script.

mod cli;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};

use cgscript::config::Settings;
use cgscript::dsl::Compiler;
use cgscript::logging::{self, LogTarget};
use cgscript::runtime::{play_session, Session, TerminalHost};
use cgscript::source::load_script;
use cgscript::tui::{self, ProgramSource};

use cli::{Command, CommandLine, Format};

fn main() -> ExitCode {
    let cli = CommandLine::parse();

    let (settings, config_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    let command = cli.command();
    let target = match command {
        Command::Tui => LogTarget::for_tui(&settings),
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(&settings, cli.verbose, target) {
        eprintln!("warning: cannot open log file: {e}");
    }
    if let Some(e) = config_error {
        warn!(error = %e, "using default settings");
    }

    let script = cli.script.clone().unwrap_or_else(|| settings.script_path());

    match command {
        Command::Run => run(&script),
        Command::Play => play(&script),
        Command::Tui => {
            if let Err(e) = tui::run_tui(ProgramSource::File(script.clone()), &settings) {
                println!("Failed to start TUI: {e}");
                println!("Falling back to CLI mode...");
                return run(&script);
            }
            ExitCode::SUCCESS
        }
        Command::Check => check(&script),
        Command::Inspect { format } => inspect(&script, format),
    }
}

/// Read the program, printing the loader error on failure.
fn read_program(path: &Path) -> Option<String> {
    match load_script(path) {
        Ok(text) => Some(text),
        Err(e) => {
            error!(path = %e.path().display(), "cannot load script");
            println!("Error: {e}");
            None
        }
    }
}

/// Legacy flow: each SOLVE plays its level as soon as it is parsed.
fn run(path: &Path) -> ExitCode {
    let Some(text) = read_program(path) else {
        return ExitCode::FAILURE;
    };

    println!("Starting Compiler (CLI mode)...");
    let result = {
        let mut host = TerminalHost::new(io::stdin().lock(), io::stdout().lock());
        Compiler::run(&text, &mut host)
    };

    match result {
        Ok(report) if report.halted => ExitCode::SUCCESS,
        Ok(_) => {
            println!("\n--- Program Finished Successfully ---");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("\nCompiler Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn play(path: &Path) -> ExitCode {
    let Some(text) = read_program(path) else {
        return ExitCode::FAILURE;
    };
    let definition = match Compiler::parse(&text) {
        Ok(definition) => definition,
        Err(e) => {
            println!("Compiler Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(definition);
    match play_session(&mut session, io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal session ended");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check(path: &Path) -> ExitCode {
    let Some(text) = read_program(path) else {
        return ExitCode::FAILURE;
    };
    match Compiler::parse(&text) {
        Ok(definition) => {
            print!("{}", definition.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Compiler Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn inspect(path: &Path, format: Format) -> ExitCode {
    let Some(text) = read_program(path) else {
        return ExitCode::FAILURE;
    };
    let definition = match Compiler::parse(&text) {
        Ok(definition) => definition,
        Err(e) => {
            println!("Compiler Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = match format {
        Format::Yaml => serde_yaml::to_string(&definition).map_err(|e| e.to_string()),
        Format::Json => serde_json::to_string_pretty(&definition)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| e.to_string()),
    };

    match rendered {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(out.as_bytes()) {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
