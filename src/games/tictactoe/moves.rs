//! Board coordinates.

use super::error::GameError;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A `(row, col)` coordinate on the board, 0-indexed.
///
/// A `Move` is always inside the grid: the only way to build one from
/// arbitrary numbers is [`Move::new`], which checks bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({}, {})", row, col)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];

    /// Creates a move, failing if the coordinates are off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row, 0-2.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0-2.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index, 0-8.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Creates a move from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Keypad number shown to the player (1-9).
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Label for this cell (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}
