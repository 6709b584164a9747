//! Core domain types for tic-tac-toe.

use super::error::GameError;
use super::moves::{Move, SIZE};
use super::rules;
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// The computer's mark.
    X,
    /// The human's mark.
    O,
}

impl Mark {
    /// Mark played by the search engine (the maximizing side).
    pub const COMPUTER: Mark = Mark::X;
    /// Mark played by the human (the minimizing side).
    pub const HUMAN: Mark = Mark::O;

    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// Result of the game as read off the board. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameOutcome {
    /// No line completed and empty cells remain.
    #[display("In progress")]
    Ongoing,
    /// A mark completed a line.
    #[display("{} wins", _0)]
    Won(Mark),
    /// Board full without a completed line.
    #[display("Draw")]
    Draw,
}

impl GameOutcome {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given cell.
    pub fn get(&self, mv: Move) -> Square {
        self.squares[mv.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Writes `mark` into an empty cell.
    ///
    /// Fails with [`GameError::InvalidMove`] if the cell is occupied, leaving
    /// the board untouched.
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), GameError> {
        if !self.is_empty(mv) {
            return Err(GameError::InvalidMove(mv));
        }
        self.squares[mv.index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Resets a cell to empty.
    pub fn clear(&mut self, mv: Move) {
        self.squares[mv.index()] = Square::Empty;
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns the mark occupying a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True when a line is completed or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Derives the outcome from the grid.
    pub fn outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(mark) => GameOutcome::Won(mark),
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::Ongoing,
        }
    }

    /// Empty cells in row-major order.
    ///
    /// This order drives move generation in the search, so it also decides
    /// which of several equally scored moves gets picked.
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.is_empty(*mv))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for sq in cells {
                let c = match sq {
                    Square::Empty => '.',
                    Square::Occupied(mark) => mark.symbol(),
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses nine cells in row-major order, e.g. `"XX./OO./..."`.
    ///
    /// `X` and `O` (any case) are marks; `.`, `-`, `_` and space are empty.
    /// `/`, `|` and line breaks separate rows and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let sq = match c {
                '/' | '|' | '\n' | '\r' => continue,
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => {
                    return Err(GameError::InvalidBoard(format!(
                        "unexpected character {other:?}"
                    )));
                }
            };
            squares.push(sq);
        }

        let squares: [Square; 9] = squares.try_into().map_err(|cells: Vec<Square>| {
            GameError::InvalidBoard(format!("expected 9 cells, found {}", cells.len()))
        })?;
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(mv(1, 1), Mark::X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(mv(1, 1), Mark::O),
            Err(GameError::InvalidMove(mv(1, 1)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = Board::new();
        board.place(mv(0, 2), Mark::O).unwrap();
        board.clear(mv(0, 2));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.get(mv(0, 0)), Square::Occupied(Mark::X));
        assert_eq!(board.get(mv(1, 1)), Square::Occupied(Mark::O));
        assert!(board.is_empty(mv(2, 2)));
        assert_eq!(board.to_string(), "XX.\nOO.\n...");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "XX./OO".parse::<Board>(),
            Err(GameError::InvalidBoard(_))
        ));
        assert!(matches!(
            "XX./OO./..Z".parse::<Board>(),
            Err(GameError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_outcome() {
        let ongoing: Board = "X........".parse().unwrap();
        assert_eq!(ongoing.outcome(), GameOutcome::Ongoing);

        let won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(won.outcome(), GameOutcome::Won(Mark::O));

        let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(drawn.outcome(), GameOutcome::Draw);

        assert!(!ongoing.outcome().is_terminal());
        assert!(won.outcome().is_terminal());
        assert!(drawn.outcome().is_terminal());
    }

    #[test]
    fn test_mark_parse() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::X));
        assert_eq!("O".parse::<Mark>(), Ok(Mark::O));
        assert!("z".parse::<Mark>().is_err());
    }
}
