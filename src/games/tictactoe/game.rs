//! Turn-taking state machine for a human against the search engine.
//!
//! A game is `Ongoing` until a line is completed or the board fills up.
//! The terminal state is absorbing: further placements are rejected until
//! the game is [`reset`](Game::reset).

use super::error::GameError;
use super::moves::Move;
use super::search::SearchEngine;
use super::types::{Board, GameOutcome, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who opens the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// Coin flip between the two sides.
    #[default]
    Random,
    /// The human moves first.
    Human,
    /// The computer moves first.
    Computer,
}

impl FirstPlayer {
    /// Resolves to a concrete mark, flipping a fair coin for `Random`.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Mark {
        match self {
            FirstPlayer::Human => Mark::HUMAN,
            FirstPlayer::Computer => Mark::COMPUTER,
            FirstPlayer::Random => {
                if rng.random_bool(0.5) {
                    Mark::HUMAN
                } else {
                    Mark::COMPUTER
                }
            }
        }
    }
}

/// A game between the human (`O`) and the computer (`X`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with `first` to move on an empty board.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            history: Vec::new(),
        }
    }

    /// Creates a new game, resolving who opens with `rng`.
    pub fn with_first_player<R: Rng + ?Sized>(first: FirstPlayer, rng: &mut R) -> Self {
        Self::new(first.resolve(rng))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the cells played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// True once the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Plays the human's move.
    #[instrument(skip(self))]
    pub fn play(&mut self, mv: Move) -> Result<GameOutcome, GameError> {
        self.apply(mv, Mark::HUMAN)
    }

    /// Lets the engine choose and play the computer's move.
    #[instrument(skip_all)]
    pub fn play_computer(&mut self, engine: &mut SearchEngine) -> Result<Move, GameError> {
        self.check_turn(Mark::COMPUTER)?;
        let mv = engine.choose_move(&mut self.board)?;
        self.apply(mv, Mark::COMPUTER)?;
        Ok(mv)
    }

    /// Starts over on an empty board with `first` to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: Mark) {
        info!("Resetting game");
        self.board.reset();
        self.history.clear();
        self.to_move = first;
    }

    fn check_turn(&self, mark: Mark) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::IllegalState(format!(
                "game is already over ({})",
                self.outcome()
            )));
        }
        if mark != self.to_move {
            return Err(GameError::WrongTurn(mark));
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move, mark: Mark) -> Result<GameOutcome, GameError> {
        self.check_turn(mark)?;
        self.board.place(mv, mark)?;
        self.history.push(mv);
        self.to_move = mark.opponent();

        let outcome = self.outcome();
        debug!(%mark, %mv, %outcome, "Move applied");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_first_player_resolution() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(FirstPlayer::Human.resolve(&mut rng), Mark::HUMAN);
        assert_eq!(FirstPlayer::Computer.resolve(&mut rng), Mark::COMPUTER);

        let marks: Vec<Mark> = (0..64)
            .map(|_| FirstPlayer::Random.resolve(&mut rng))
            .collect();
        assert!(marks.contains(&Mark::HUMAN));
        assert!(marks.contains(&Mark::COMPUTER));
    }

    #[test]
    fn test_first_player_parse() {
        assert_eq!("human".parse::<FirstPlayer>(), Ok(FirstPlayer::Human));
        assert_eq!("Computer".parse::<FirstPlayer>(), Ok(FirstPlayer::Computer));
        assert_eq!(FirstPlayer::Random.to_string(), "random");
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Mark::HUMAN);
        let mut engine = SearchEngine::new();

        assert_eq!(game.play(mv(1, 1)), Ok(GameOutcome::Ongoing));
        assert_eq!(game.to_move(), Mark::COMPUTER);
        assert_eq!(game.play(mv(0, 0)), Err(GameError::WrongTurn(Mark::HUMAN)));

        let reply = game.play_computer(&mut engine).unwrap();
        assert_eq!(game.history(), &[mv(1, 1), reply]);
        assert_eq!(game.to_move(), Mark::HUMAN);
        assert!(matches!(
            game.play_computer(&mut engine),
            Err(GameError::WrongTurn(Mark::COMPUTER))
        ));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::new(Mark::HUMAN);
        let mut engine = SearchEngine::new();
        game.play(mv(1, 1)).unwrap();
        game.play_computer(&mut engine).unwrap();

        assert_eq!(game.play(mv(1, 1)), Err(GameError::InvalidMove(mv(1, 1))));
        assert_eq!(game.to_move(), Mark::HUMAN);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_terminal_is_absorbing() {
        let mut game = Game::new(Mark::COMPUTER);
        let mut engine = SearchEngine::new();

        // Human ignores the computer's threats.
        let human_moves = [mv(0, 1), mv(2, 1), mv(1, 0), mv(1, 2)];
        let mut human = human_moves.iter().copied();
        while !game.is_over() {
            if game.to_move() == Mark::COMPUTER {
                game.play_computer(&mut engine).unwrap();
            } else {
                let next = human
                    .by_ref()
                    .find(|m| game.board().is_empty(*m))
                    .or_else(|| game.board().empty_cells().first().copied())
                    .unwrap();
                game.play(next).unwrap();
            }
        }

        assert_eq!(game.outcome(), GameOutcome::Won(Mark::COMPUTER));
        assert!(matches!(
            game.play(mv(0, 0)),
            Err(GameError::IllegalState(_))
        ));
        assert!(matches!(
            game.play_computer(&mut engine),
            Err(GameError::IllegalState(_))
        ));
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(Mark::HUMAN);
        game.play(mv(0, 0)).unwrap();
        game.reset(Mark::COMPUTER);

        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Mark::COMPUTER);
        assert_eq!(game.outcome(), GameOutcome::Ongoing);
    }
}
