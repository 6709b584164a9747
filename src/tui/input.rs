//! Keyboard mapping for the board cursor.

use crate::games::tictactoe::{Move, SIZE};
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(SIZE - 1)),
        _ => return cursor,
    };
    Move::new(row, col).unwrap_or(cursor)
}

/// Maps keypad digits 1-9 to cells, row-major from the top left.
pub fn digit_to_move(c: char) -> Option<Move> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Move::from_index)
}
