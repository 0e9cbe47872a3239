//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the board, the game state machine and the search all
//! evaluate terminal states the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_lines};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// A completed line always takes precedence over a full board, so a move
/// that fills the last square and completes a line is a win.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
