//! The 3x3 board.

use crate::error::{BoardParseError, MoveError};
use crate::{Mark, Outcome, Position, Square, rules};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: copying it yields an independent board,
/// which is how the search explores hypothetical continuations without
/// touching the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets a square without any legality check.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if a mark may be placed at the position (the square is empty).
    pub fn is_legal(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Like [`Board::is_legal`], for a two-letter position code.
    ///
    /// Codes that name no square are never legal.
    pub fn is_legal_code(&self, code: &str) -> bool {
        Position::parse(code).is_some_and(|pos| self.is_legal(pos))
    }

    /// Places `mark` on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the square already holds a mark;
    /// the board is left unchanged.
    #[instrument(level = "debug", skip(self), fields(position = %pos, mark = %mark))]
    pub fn apply(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if let Square::Occupied(by) = self.get(pos) {
            debug!(occupant = %by, "Rejected move onto occupied square");
            return Err(MoveError::Occupied { position: pos, by });
        }
        self.set(pos, Square::Occupied(mark));
        Ok(())
    }

    /// Places `mark` on the square named by a two-letter code.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Unrecognized`] for unknown codes and
    /// [`MoveError::Occupied`] for occupied squares.
    pub fn apply_code(&mut self, code: &str, mark: Mark) -> Result<Position, MoveError> {
        let pos: Position = code.parse()?;
        self.apply(pos, mark)?;
        Ok(pos)
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// Callers must only pass positions taken from [`Board::legal_moves`].
    pub(crate) fn with_move(&self, pos: Position, mark: Mark) -> Self {
        debug_assert!(self.is_legal(pos), "{pos} is already occupied");
        let mut next = *self;
        next.set(pos, Square::Occupied(mark));
        next
    }

    /// Empty positions in row-major order.
    ///
    /// The order is fixed; the search relies on it to break ties.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_legal(pos))
            .collect()
    }

    /// Evaluates the board: win before draw before ongoing.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Mark due to move next, given which mark opened the game.
    pub fn to_move(&self, first: Mark) -> Mark {
        if self.count(first) > self.count(first.opponent()) {
            first.opponent()
        } else {
            first
        }
    }

    /// Clears every square.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for square in cells {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Reads nine cells (`X`, `O`, or one of `.`/`_`/`-` for empty).
    ///
    /// `/`, `|` and whitespace may separate rows and are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut cells = 0usize;
        for ch in s.chars() {
            let square = match ch.to_ascii_uppercase() {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected character {other:?}"
                    )));
                }
            };
            let pos = Position::from_index(cells)
                .ok_or_else(|| BoardParseError::new("more than 9 cells"))?;
            board.set(pos, square);
            cells += 1;
        }
        if cells != 9 {
            return Err(BoardParseError::new(format!(
                "expected 9 cells, found {cells}"
            )));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_single_square() {
        let mut board = Board::new();
        board.apply(Position::Center, Mark::X).unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board.filled(), 1);
    }

    #[test]
    fn test_apply_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.apply(Position::Center, Mark::X).unwrap();
        let before = board;

        let err = board.apply(Position::Center, Mark::O).unwrap_err();
        assert_eq!(
            err,
            MoveError::Occupied {
                position: Position::Center,
                by: Mark::X
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_code_rejects_unknown() {
        let mut board = Board::new();
        let err = board.apply_code("ZZ", Mark::X).unwrap_err();
        assert!(matches!(err, MoveError::Unrecognized(_)));
        assert_eq!(board, Board::new());
        assert_eq!(board.apply_code("hg", Mark::X), Ok(Position::TopLeft));
    }

    #[test]
    fn test_is_legal_code() {
        let board: Board = "X../.../...".parse().unwrap();
        assert!(!board.is_legal_code("HG"));
        assert!(!board.is_legal_code("tl"));
        assert!(board.is_legal_code("HM"));
        assert!(!board.is_legal_code("nowhere"));
    }

    #[test]
    fn test_copy_is_independent() {
        let mut board = Board::new();
        let snapshot = board;
        board.apply(Position::TopLeft, Mark::O).unwrap();
        assert_eq!(snapshot, Board::new());
        assert_ne!(snapshot, board);
    }

    #[test]
    fn test_with_move_leaves_source_board() {
        let board = Board::new();
        let next = board.with_move(Position::BottomRight, Mark::X);
        assert!(board.is_legal(Position::BottomRight));
        assert_eq!(next.get(Position::BottomRight), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board: Board = "XOX/OXO/...".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.legal_moves().len(), 9);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let board: Board = "x.o | .x. | o..".parse().unwrap();
        assert_eq!(board.to_string(), "X.O\n.X.\nO..");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_layouts() {
        assert!("XO".parse::<Board>().is_err());
        let err = "XOXOXOXOXO".parse::<Board>().unwrap_err();
        assert_eq!(err.message, "more than 9 cells");
        assert!("XOX/O?X/OXO".parse::<Board>().is_err());
    }

    #[test]
    fn test_to_move_alternates_from_first() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(board.to_move(Mark::X), Mark::O);
        assert_eq!(Board::new().to_move(Mark::O), Mark::O);
    }
}
