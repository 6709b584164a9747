//! Full-board check.

use super::super::{Board, Square};

/// True when no cell is left to play. Without a completed line this is a
/// draw.
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}
