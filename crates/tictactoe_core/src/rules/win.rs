//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};

/// Reports every completed line on the board.
///
/// Each entry is an index into [`Position::LINES`] and the mark filling it.
/// All 8 lines are scanned on every call; a well-formed game has at most
/// one entry, or two sharing the final square.
pub fn winning_lines(board: &Board) -> Vec<(usize, Mark)> {
    Position::LINES
        .iter()
        .enumerate()
        .filter_map(|(index, line)| line_owner(board, *line).map(|mark| (index, mark)))
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first completed line in [`Position::LINES`]
/// order, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let mut winner = None;
    for line in Position::LINES {
        if let Some(mark) = line_owner(board, line) {
            winner.get_or_insert(mark);
        }
    }
    winner
}

fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Mark> {
    let sq = board.get(a);
    if sq == board.get(b) && sq == board.get(c) {
        sq.mark()
    } else {
        None
    }
}
