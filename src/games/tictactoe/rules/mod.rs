//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the board methods and the search share one definition
//! of a completed line.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
