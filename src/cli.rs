//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{FirstPlayer, Mark};

/// Strictly Minimax - tic-tac-toe against an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Who opens each game: random, human or computer (overrides config)
        #[arg(long)]
        first: Option<FirstPlayer>,
    },

    /// Print the best move for a position, e.g. `solve "XX./OO./..."`
    Solve {
        /// Nine cells row-major: X, O, or . for empty; `/` separates rows
        board: String,

        /// Side to move
        #[arg(short, long, default_value = "x")]
        mark: Mark,
    },

    /// Let the engine play both sides and print the game
    Selfplay {
        /// Who opens: random, human (O) or computer (X)
        #[arg(long, default_value = "computer")]
        first: FirstPlayer,
    },
}
