//! The nine board positions, which double as the move set.

use crate::error::UnknownPosition;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Every move names exactly one position, so this closed enum is the
/// complete move set. Variants are declared in row-major order, which
/// is also the canonical enumeration order used for tie-breaking.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The 8 winning lines: rows, then columns, then diagonals.
    pub const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
        // Columns
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        [Position::TopCenter, Position::Center, Position::BottomCenter],
        [Position::TopRight, Position::MiddleRight, Position::BottomRight],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    /// The three rows, top to bottom.
    pub fn rows() -> [[Position; 3]; 3] {
        [Self::LINES[0], Self::LINES[1], Self::LINES[2]]
    }

    /// The three columns, left to right.
    pub fn columns() -> [[Position; 3]; 3] {
        [Self::LINES[3], Self::LINES[4], Self::LINES[5]]
    }

    /// The main diagonal followed by the anti-diagonal.
    pub fn diagonals() -> [[Position; 3]; 2] {
        [Self::LINES[6], Self::LINES[7]]
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0 = left).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// `(row, col)` coordinate pair.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Creates position from a `(row, col)` pair.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Two-letter code: row letter (`H`aut, `M`ilieu, `B`as) then column
    /// letter (`G`auche, `M`ilieu, `D`roite).
    pub fn code(self) -> &'static str {
        match self {
            Position::TopLeft => "HG",
            Position::TopCenter => "HM",
            Position::TopRight => "HD",
            Position::MiddleLeft => "MG",
            Position::Center => "MM",
            Position::MiddleRight => "MD",
            Position::BottomLeft => "BG",
            Position::BottomCenter => "BM",
            Position::BottomRight => "BD",
        }
    }

    /// English alias accepted by [`Position::parse`]: `T`/`M`/`B` then
    /// `L`/`C`/`R`. No alias collides with a code for another square.
    pub fn alias(self) -> &'static str {
        match self {
            Position::TopLeft => "TL",
            Position::TopCenter => "TC",
            Position::TopRight => "TR",
            Position::MiddleLeft => "ML",
            Position::Center => "MC",
            Position::MiddleRight => "MR",
            Position::BottomLeft => "BL",
            Position::BottomCenter => "BC",
            Position::BottomRight => "BR",
        }
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Looks up a position by its two-letter code or English alias.
    ///
    /// Surrounding whitespace is ignored and letters match case-insensitively.
    #[instrument(level = "trace")]
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.iter().copied().find(|pos| {
            pos.code().eq_ignore_ascii_case(code) || pos.alias().eq_ignore_ascii_case(code)
        })
    }
}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownPosition::new(s))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_all_matches_declaration_order() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
        assert_eq!(Position::COUNT, 9);
    }

    #[test]
    fn test_coords_cover_grid_once() {
        let mut seen = [[false; 3]; 3];
        for pos in Position::ALL {
            let (row, col) = pos.coords();
            assert!(!seen[row][col], "{pos} maps to an already used cell");
            seen[row][col] = true;
            assert_eq!(Position::from_coords(row, col), Some(pos));
        }
        assert!(seen.iter().flatten().all(|&s| s));
    }

    #[test]
    fn test_from_coords_out_of_range() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Position::parse("mm"), Some(Position::Center));
        assert_eq!(Position::parse(" bd \n"), Some(Position::BottomRight));
        assert_eq!(Position::parse("hG"), Some(Position::TopLeft));
        assert_eq!(Position::parse("XY"), None);
        assert_eq!(Position::parse(""), None);
    }

    #[test]
    fn test_codes_and_aliases_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for pos in Position::ALL {
            assert!(seen.insert(pos.code()), "{pos} code reused");
            assert!(seen.insert(pos.alias()), "{pos} alias reused");
            assert_eq!(Position::parse(pos.alias()), Some(pos));
        }
    }

    #[test]
    fn test_line_groups() {
        assert_eq!(Position::rows().len(), 3);
        assert_eq!(Position::columns().len(), 3);
        assert_eq!(Position::diagonals().len(), 2);
        assert!(Position::rows().iter().all(|r| r.iter().all(|p| p.row() == r[0].row())));
        assert!(Position::columns().iter().all(|c| c.iter().all(|p| p.col() == c[0].col())));
    }
}
