//! Application state and logic.

use crate::games::tictactoe::{FirstPlayer, Game, GameError, GameOutcome, Mark, Move, SearchEngine};
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::input::{digit_to_move, move_cursor};

/// Main application state.
pub struct App {
    game: Game,
    engine: SearchEngine,
    first_player: FirstPlayer,
    rng: StdRng,
    cursor: Move,
    hint: Option<Move>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application and starts the first game.
    pub fn new(first_player: FirstPlayer) -> Self {
        Self::with_rng(first_player, StdRng::from_os_rng())
    }

    /// Creates a new application with a fixed random source.
    pub fn with_rng(first_player: FirstPlayer, mut rng: StdRng) -> Self {
        let game = Game::with_first_player(first_player, &mut rng);
        let mut app = Self {
            game,
            engine: SearchEngine::new(),
            first_player,
            rng,
            cursor: Move::ALL[4],
            hint: None,
            status_message: String::new(),
            should_quit: false,
        };
        app.begin();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// Suggested cell for the human, if one was requested.
    pub fn hint(&self) -> Option<Move> {
        self.hint
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Result banner for a finished game.
    pub fn banner(&self) -> Option<&'static str> {
        match self.game.outcome() {
            GameOutcome::Ongoing => None,
            GameOutcome::Draw => Some("Draw!"),
            GameOutcome::Won(Mark::HUMAN) => Some("You win!"),
            GameOutcome::Won(Mark::COMPUTER) => Some("Computer wins!"),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "Handling key");
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('h') => self.show_hint(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) => {
                if let Some(mv) = digit_to_move(c) {
                    self.cursor = mv;
                    self.select(mv);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Handles a left click; `cell` is the board cell under the pointer.
    ///
    /// Any click on a finished game starts a new one.
    pub fn handle_click(&mut self, cell: Option<Move>) {
        if self.game.is_over() {
            self.restart();
            return;
        }
        if let Some(mv) = cell {
            self.cursor = mv;
            self.select(mv);
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        let first = self.first_player.resolve(&mut self.rng);
        self.game.reset(first);
        self.begin();
    }

    fn begin(&mut self) {
        self.hint = None;
        info!(first = %self.game.to_move(), "New game");
        if self.game.to_move() == Mark::COMPUTER {
            self.computer_turn();
        } else {
            self.status_message = "Your turn (O).".to_string();
        }
    }

    fn select(&mut self, mv: Move) {
        if self.game.is_over() {
            self.restart();
            return;
        }

        match self.game.play(mv) {
            Ok(_) => {
                self.hint = None;
                self.computer_turn();
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = reject_message(&e);
            }
        }
    }

    fn computer_turn(&mut self) {
        if !self.game.is_over() && self.game.to_move() == Mark::COMPUTER {
            match self.game.play_computer(&mut self.engine) {
                Ok(mv) => {
                    info!(%mv, nodes = self.engine.nodes(), "Computer moved");
                    self.status_message = format!("Computer played {}. Your turn.", mv.label());
                }
                Err(e) => {
                    warn!(error = %e, "Computer could not move");
                    self.status_message = format!("Computer could not move: {}", e);
                }
            }
        }

        if let Some(banner) = self.banner() {
            self.status_message =
                format!("{} Press 'r' or click to play again, 'q' to quit.", banner);
        }
    }

    fn show_hint(&mut self) {
        if self.game.is_over() {
            return;
        }
        let mut board = self.game.board().clone();
        match self.engine.analyze(&mut board, Mark::HUMAN) {
            Ok(choice) => {
                self.hint = Some(*choice.mv());
                self.status_message = format!("Hint: {}", choice.mv().label());
            }
            Err(e) => self.status_message = format!("No hint: {}", e),
        }
    }
}

fn reject_message(err: &GameError) -> String {
    match err {
        GameError::InvalidMove(mv) => format!("{} is taken. Pick another cell.", mv.label()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn app(first: FirstPlayer) -> App {
        App::with_rng(first, StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_computer_opens_when_first() {
        let app = app(FirstPlayer::Computer);
        assert_eq!(app.game().history(), &[Move::ALL[0]]);
        assert_eq!(app.game().to_move(), Mark::HUMAN);
    }

    #[test]
    fn test_human_move_triggers_reply() {
        let mut app = app(FirstPlayer::Human);
        assert!(app.game().history().is_empty());

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().board().get(Move::ALL[4]), Square::Occupied(Mark::HUMAN));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.game().to_move(), Mark::HUMAN);
    }

    #[test]
    fn test_taken_cell_reports_status() {
        let mut app = app(FirstPlayer::Computer);
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.game().history().len(), 1);
        assert!(app.status_message().contains("taken"));
    }

    #[test]
    fn test_hint_and_quit() {
        let mut app = app(FirstPlayer::Human);
        app.handle_key(KeyCode::Char('h'));
        assert!(app.hint().is_some());
        assert!(app.status_message().starts_with("Hint"));

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_after_game_over_restarts() {
        let mut app = app(FirstPlayer::Human);
        while !app.game().is_over() {
            let cell = app.game().board().empty_cells()[0];
            app.handle_click(Some(cell));
        }
        assert!(app.banner().is_some());
        assert_ne!(app.banner(), Some("You win!"));

        app.handle_click(None);
        assert!(!app.game().is_over());
        assert!(app.banner().is_none());
    }
}
