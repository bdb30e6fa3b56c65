use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[clap(name = "cgscript", version, about = "Play country-guessing game scripts")]
pub struct CommandLine {
    /// Program file (defaults to the configured script, then game.cgs)
    #[clap(long, global = true)]
    pub script: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Parse the program and play each SOLVE as it is reached
    Run,
    /// Parse the program, then play every level in the terminal
    Play,
    /// Open the full-screen interface
    #[clap(alias = "gui")]
    Tui,
    /// Parse only and summarize the program
    Check,
    /// Parse only and print the program state
    Inspect {
        #[clap(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

impl CommandLine {
    /// The chosen command; bare `cgscript` runs the program.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_runs() {
        let cli = CommandLine::try_parse_from(["cgscript"]).unwrap();
        assert_eq!(cli.command(), Command::Run);
        assert_eq!(cli.verbose, 0);
        assert!(cli.script.is_none());
    }

    #[test]
    fn script_and_verbosity() {
        let cli =
            CommandLine::try_parse_from(["cgscript", "--script", "quiz.cgs", "-vv", "play"])
                .unwrap();
        assert_eq!(cli.command(), Command::Play);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.script, Some(PathBuf::from("quiz.cgs")));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = CommandLine::try_parse_from(["cgscript", "check", "--script", "a.cgs"]).unwrap();
        assert_eq!(cli.command(), Command::Check);
        assert_eq!(cli.script, Some(PathBuf::from("a.cgs")));
    }

    #[test]
    fn gui_is_tui_alias() {
        let cli = CommandLine::try_parse_from(["cgscript", "gui"]).unwrap();
        assert_eq!(cli.command(), Command::Tui);
    }

    #[test]
    fn inspect_format() {
        let cli = CommandLine::try_parse_from(["cgscript", "inspect"]).unwrap();
        assert_eq!(cli.command(), Command::Inspect { format: Format::Yaml });
        let cli = CommandLine::try_parse_from(["cgscript", "inspect", "--format", "json"]).unwrap();
        assert_eq!(cli.command(), Command::Inspect { format: Format::Json });
        assert!(CommandLine::try_parse_from(["cgscript", "inspect", "--format", "xml"]).is_err());
    }
}
