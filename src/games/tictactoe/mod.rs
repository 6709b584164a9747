//! Tic-tac-toe: board, rules, search engine and game state machine.

mod error;
mod game;
mod moves;
pub mod rules;
pub mod search;
mod types;

pub use error::GameError;
pub use game::{FirstPlayer, Game};
pub use moves::{Move, SIZE};
pub use search::{Choice, DRAW, LOSS, Score, SearchEngine, WIN, evaluate};
pub use types::{Board, GameOutcome, Mark, Square};
