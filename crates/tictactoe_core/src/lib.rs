//! Tic-tac-toe decision engine.
//!
//! Board state (legal moves, win and draw detection) plus an exhaustive
//! minimax search, optionally with alpha-beta pruning, that picks an
//! optimal move for an automated player.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Mark, Position, SearchEngine};
//!
//! let mut board = Board::new();
//! board.apply(Position::TopLeft, Mark::X)?;
//! board.apply(Position::Center, Mark::O)?;
//! board.apply(Position::TopCenter, Mark::X)?;
//!
//! // O must block the top row.
//! let reply = SearchEngine::choose_move(&board, Mark::O, Mark::X, true)?;
//! assert_eq!(reply, Position::TopRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod outcome;
mod position;
pub mod rules;
mod search;
mod types;

pub use board::Board;
pub use error::{BoardParseError, MoveError, SearchError, UnknownPosition};
pub use game::Game;
pub use outcome::Outcome;
pub use position::Position;
pub use search::{Candidate, Pruning, SearchEngine, SearchReport, WIN_SCORE};
pub use types::{Mark, Square};
