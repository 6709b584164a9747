//! Exhaustive minimax search.
//!
//! The engine explores every continuation to the end of the game with no
//! pruning, no depth limit and no memoization. Scores are exactly -1, 0 or
//! +1 from the computer's point of view and are not weighted by depth, so a
//! slow win scores the same as a fast one. Among equally scored moves the
//! first one in row-major order wins.

use super::error::GameError;
use super::moves::Move;
use super::types::{Board, Mark};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Game-theoretic value of a board for the computer.
pub type Score = i32;

/// Computer has won.
pub const WIN: Score = 1;
/// Human has won.
pub const LOSS: Score = -1;
/// Nobody won.
pub const DRAW: Score = 0;

/// Scores a finished board: +1 computer win, -1 human win, 0 draw.
///
/// Fails with [`GameError::IllegalState`] when the board is still in play;
/// callers must check [`Board::is_terminal`] first.
pub fn evaluate(board: &Board) -> Result<Score, GameError> {
    if !board.is_terminal() {
        return Err(GameError::IllegalState(
            "cannot evaluate a board that is still in play".to_string(),
        ));
    }
    Ok(match board.winner() {
        Some(Mark::COMPUTER) => WIN,
        Some(Mark::HUMAN) => LOSS,
        None => DRAW,
    })
}

/// Outcome of a move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Choice {
    /// Chosen cell.
    mv: Move,
    /// Minimax value of the position after playing `mv`.
    score: Score,
    /// Positions visited while choosing.
    nodes: u64,
}

/// Minimax search engine.
///
/// Holds only a node counter; the board is borrowed for the duration of a
/// call and is restored to its original contents before the call returns.
#[derive(Debug, Default)]
pub struct SearchEngine {
    nodes: u64,
}

impl SearchEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the last [`analyze`](Self::analyze) or
    /// [`choose_move`](Self::choose_move) call.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Value of `board` with the computer maximizing and the human
    /// minimizing. `maximizing` says whose turn it is.
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool) -> Result<Score, GameError> {
        self.nodes += 1;

        if board.is_terminal() {
            return evaluate(board);
        }

        let (mark, mut best) = if maximizing {
            (Mark::COMPUTER, Score::MIN)
        } else {
            (Mark::HUMAN, Score::MAX)
        };

        for mv in board.empty_cells() {
            board.place(mv, mark)?;
            let score = self.minimax(board, !maximizing);
            board.clear(mv);

            let score = score?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        Ok(best)
    }

    /// Picks the computer's move.
    ///
    /// Fails with [`GameError::IllegalState`] on a finished board.
    #[instrument(skip_all)]
    pub fn choose_move(&mut self, board: &mut Board) -> Result<Move, GameError> {
        self.analyze(board, Mark::COMPUTER).map(|choice| choice.mv)
    }

    /// Picks the best move for `mark` and reports its score.
    ///
    /// The computer keeps the first cell with a strictly greater score, the
    /// human the first cell with a strictly lower one.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn analyze(&mut self, board: &mut Board, mark: Mark) -> Result<Choice, GameError> {
        if board.is_terminal() {
            return Err(GameError::IllegalState(format!(
                "no move to choose: game is over ({})",
                board.outcome()
            )));
        }

        self.nodes = 0;
        let maximizing = mark == Mark::COMPUTER;
        let mut best: Option<(Move, Score)> = None;

        for mv in board.empty_cells() {
            board.place(mv, mark)?;
            let score = self.minimax(board, !maximizing);
            board.clear(mv);

            let score = score?;
            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best.ok_or_else(|| {
            GameError::IllegalState("no empty cell to play".to_string())
        })?;

        debug!(%mark, %mv, score, nodes = self.nodes, "Search complete");
        Ok(Choice {
            mv,
            score,
            nodes: self.nodes,
        })
    }

    /// Plays both sides optimally from `board` until the game ends,
    /// starting with `first`. Returns every choice in order.
    #[instrument(skip(self, board))]
    pub fn self_play(&mut self, board: &mut Board, first: Mark) -> Result<Vec<Choice>, GameError> {
        let mut to_move = first;
        let mut choices = Vec::new();
        while !board.is_terminal() {
            let choice = self.analyze(board, to_move)?;
            board.place(choice.mv, to_move)?;
            choices.push(choice);
            to_move = to_move.opponent();
        }
        Ok(choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_evaluate_terminal_boards() {
        assert_eq!(evaluate(&board("XXX/OO./...")), Ok(WIN));
        assert_eq!(evaluate(&board("OOO/XX./X..")), Ok(LOSS));
        assert_eq!(evaluate(&board("XOX/XOO/OXX")), Ok(DRAW));
    }

    #[test]
    fn test_evaluate_rejects_ongoing_board() {
        assert!(matches!(
            evaluate(&board("XX./OO./...")),
            Err(GameError::IllegalState(_))
        ));
    }

    #[test]
    fn test_minimax_immediate_win() {
        let mut b = board("XX./OO./...");
        let mut engine = SearchEngine::new();
        assert_eq!(engine.minimax(&mut b, true), Ok(WIN));
        assert_eq!(b, board("XX./OO./..."));
    }

    #[test]
    fn test_minimax_terminal_counts_one_node() {
        let mut b = board("XOX/XOO/OXX");
        let mut engine = SearchEngine::new();
        assert_eq!(engine.minimax(&mut b, true), Ok(DRAW));
        assert_eq!(engine.nodes, 1);
    }

    #[test]
    fn test_choose_completes_row() {
        let mut b = board("XX./OO./...");
        let choice = SearchEngine::new().analyze(&mut b, Mark::COMPUTER).unwrap();
        assert_eq!(*choice.mv(), mv(0, 2));
        assert_eq!(*choice.score(), WIN);
    }

    #[test]
    fn test_choose_blocks_fork() {
        // O playing (2,2) would threaten both the bottom row and the diagonal.
        let mut b = board("O.X/.../.O.");
        let choice = SearchEngine::new().analyze(&mut b, Mark::COMPUTER).unwrap();
        assert_eq!(*choice.mv(), mv(2, 2));
        assert_eq!(*choice.score(), DRAW);
    }

    #[test]
    fn test_choose_on_finished_board_fails() {
        let mut b = board("XXX/OO./...");
        let mut engine = SearchEngine::new();
        assert!(matches!(
            engine.choose_move(&mut b),
            Err(GameError::IllegalState(_))
        ));

        let mut full = board("XOX/XOO/OXX");
        assert!(matches!(
            engine.choose_move(&mut full),
            Err(GameError::IllegalState(_))
        ));
    }

    #[test]
    fn test_human_side_minimizes() {
        let mut b = board("XX./OO./...");
        let choice = SearchEngine::new().analyze(&mut b, Mark::HUMAN).unwrap();
        assert_eq!(*choice.score(), LOSS);
    }
}
