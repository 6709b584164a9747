//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Move, Square};

/// The eight winning lines as row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
/// In a legal game at most one mark can complete a line, so the order the
/// lines are scanned in does not change the answer.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.squares()[a];
        match sq {
            Square::Occupied(mark)
                if sq == board.squares()[b] && sq == board.squares()[c] =>
            {
                Some(mark)
            }
            _ => None,
        }
    })
}

/// Returns the completed line for `mark`, if any, as cells.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Move; 3]> {
    let target = Square::Occupied(mark);
    LINES
        .iter()
        .find(|line| line.iter().all(|&i| board.squares()[i] == target))
        .and_then(|&[a, b, c]| {
            Some([Move::from_index(a)?, Move::from_index(b)?, Move::from_index(c)?])
        })
}
