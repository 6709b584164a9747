//! Strictly Minimax library - tic-tac-toe against exhaustive search
//!
//! A human plays `O` against a computer playing `X` that searches the whole
//! game tree and never loses.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid, placements, win/draw detection
//! - **Search**: brute-force minimax and move selection
//! - **Game**: turn-taking state machine with reset
//! - **TUI**: terminal front end (keyboard and mouse)
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, SearchEngine};
//!
//! # fn example() -> Result<(), strictly_minimax::GameError> {
//! let mut board: Board = "XX./OO./...".parse()?;
//! let mv = SearchEngine::new().choose_move(&mut board)?;
//! assert_eq!(mv, Move::new(0, 2)?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Choice, DRAW, FirstPlayer, Game, GameError, GameOutcome, LOSS, Mark, Move, SIZE,
    Score, SearchEngine, Square, WIN, evaluate, rules,
};

// Crate-level exports - Terminal UI
pub use tui::run_tui;
