//! Plain minimax.

use super::{Perspective, SearchStats};
use crate::Board;

/// Backed-up value of `board` for `side.mover`.
///
/// `depth` counts plies below the root candidate and only shapes terminal
/// scores; the recursion always runs to the end of the game.
pub(super) fn value(
    board: &Board,
    side: Perspective,
    depth: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    if let Some(score) = side.terminal_score(board, depth) {
        return score;
    }

    let mark = side.mark_for(maximizing);
    if maximizing {
        let mut best = i32::MIN;
        for pos in board.legal_moves() {
            let score = value(&board.with_move(pos, mark), side, depth + 1, false, stats);
            best = best.max(score);
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in board.legal_moves() {
            let score = value(&board.with_move(pos, mark), side, depth + 1, true, stats);
            best = best.min(score);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn x_vs_o() -> Perspective {
        Perspective {
            mover: Mark::X,
            opponent: Mark::O,
        }
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut stats = SearchStats::default();
        assert_eq!(value(&Board::new(), x_vs_o(), 0, true, &mut stats), 0);
        // Every game of tic-tac-toe, counted once per reachable node.
        assert_eq!(stats.nodes, 549_946);
    }

    #[test]
    fn test_forced_win_scored_by_depth() {
        // O to play with X threatening both top right and bottom left: O blocks one, X
        // completes the other two plies down.
        let board: Board = "XX./XOO/...".parse().unwrap();
        let mut stats = SearchStats::default();
        let score = value(&board, x_vs_o(), 0, false, &mut stats);
        assert_eq!(score, 10 - 2);
    }
}
