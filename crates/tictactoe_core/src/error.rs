//! Error types for board updates and search.

use crate::{Mark, Outcome, Position};
use derive_more::{Display, Error, From};

/// A position code that names none of the nine squares.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized position code {input:?}")]
pub struct UnknownPosition {
    /// The rejected input, verbatim.
    pub input: String,
}

impl UnknownPosition {
    /// Creates a new unknown-position error.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A move that cannot be applied.
///
/// The board is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("Square {position} is already occupied by {by}")]
    Occupied {
        /// The requested square.
        position: Position,
        /// The mark already on it.
        by: Mark,
    },

    /// The move names no known square.
    #[display("{_0}")]
    #[from]
    Unrecognized(UnknownPosition),

    /// The game has already ended.
    #[display("Game is already over ({outcome})")]
    GameOver {
        /// The terminal outcome.
        outcome: Outcome,
    },
}

/// The search engine was asked to move in a position with nothing to search.
///
/// These indicate a sequencing bug in the caller, not a transient failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The board is already won, though empty squares remain.
    #[display("Cannot search a finished game ({outcome})")]
    GameOver {
        /// The terminal outcome found on the board.
        outcome: Outcome,
    },

    /// No empty square remains.
    #[display("No legal moves left to search")]
    ExhaustedMoves,

    /// Mover and opponent were given the same mark.
    #[display("Mover and opponent both play {mark}")]
    SameMark {
        /// The shared mark.
        mark: Mark,
    },
}

/// A textual board layout that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board layout: {message}")]
pub struct BoardParseError {
    /// What was wrong with the layout.
    pub message: String,
}

impl BoardParseError {
    /// Creates a new layout error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
