//! Error types for board and search operations.

use super::moves::Move;
use super::types::Mark;

/// Error raised when a board or game precondition is violated.
///
/// These are local precondition failures: the caller is expected to avoid
/// them by checking emptiness or terminality first, and decides how to
/// react (reject the click, skip the turn).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The target cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    InvalidMove(Move),

    /// Coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The operation is not allowed in the current board or game state.
    #[display("Illegal state: {}", _0)]
    IllegalState(String),

    /// The given mark is not the side to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// A board could not be parsed from text.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),
}

impl std::error::Error for GameError {}
