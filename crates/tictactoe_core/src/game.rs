//! Turn-taking state machine around a board.

use crate::error::MoveError;
use crate::{Board, Mark, Outcome, Position};
use tracing::{debug, instrument};

/// Tic-tac-toe game: a board plus whose turn it is.
///
/// The status is never cached; it is recomputed from the board so it cannot
/// drift from the grid. Once the status is terminal every move is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
    first: Mark,
}

impl Game {
    /// Creates a new game where `first` moves first.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            first,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark due to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the mark that opened the game.
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Current status, evaluated from the board.
    pub fn status(&self) -> Outcome {
        self.board.outcome()
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Plays the current mover's mark at `pos` and hands the turn over.
    ///
    /// Returns the status after the move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game is won or drawn, and
    /// [`MoveError::Occupied`] for an occupied square. Neither changes the game.
    #[instrument(skip(self), fields(position = %pos, mark = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(MoveError::GameOver { outcome: status });
        }

        self.board.apply(pos, self.to_move)?;

        let status = self.status();
        if status.is_terminal() {
            debug!(%status, "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(status)
    }

    /// Clears the board and gives the move back to the opening mark.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = self.first;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}
