//! Command-line interface for tictactally.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tictactally - two-player tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactally")]
#[command(about = "Two-player tic-tac-toe that remembers the score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactally.toml")]
    pub config: PathBuf,

    /// Directory holding the saved game (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the saved board, status and scores
    Status {
        /// Emit the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reset the scoreboard and start a fresh round
    Reset {
        /// Delete the saved game entirely instead
        #[arg(long)]
        wipe: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["tictactally"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactally.toml"));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["tictactally", "reset", "--wipe", "--data-dir", "/tmp/t"]);
        assert_eq!(cli.command, Some(Command::Reset { wipe: true }));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/t")));
    }
}
