//! Minimax with alpha-beta cutoffs.

use super::{Perspective, SearchStats};
use crate::Board;

/// Same value as [`super::minimax::value`], skipping siblings once
/// `beta <= alpha`.
///
/// `alpha` is the best score the maximizer can already guarantee elsewhere
/// in the tree, `beta` the best the minimizer can. With the unbounded window
/// `(i32::MIN, i32::MAX)` the returned score is exact.
pub(super) fn value(
    board: &Board,
    side: Perspective,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
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
            let child = board.with_move(pos, mark);
            best = best.max(value(&child, side, depth + 1, false, alpha, beta, stats));
            alpha = alpha.max(best);
            if beta <= alpha {
                // beta cutoff
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in board.legal_moves() {
            let child = board.with_move(pos, mark);
            best = best.min(value(&child, side, depth + 1, true, alpha, beta, stats));
            beta = beta.min(best);
            if beta <= alpha {
                // alpha cutoff
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::super::minimax;
    use super::*;
    use crate::Mark;

    #[test]
    fn test_matches_plain_minimax_on_sample_positions() {
        let side = Perspective {
            mover: Mark::O,
            opponent: Mark::X,
        };
        for layout in ["X../.../...", "X.O/.X./...", "XO./.X./..O", "X../.O./..X"] {
            let board: Board = layout.parse().unwrap();
            for maximizing in [true, false] {
                let mut plain_stats = SearchStats::default();
                let mut pruned_stats = SearchStats::default();
                let plain = minimax::value(&board, side, 0, maximizing, &mut plain_stats);
                let pruned =
                    value(&board, side, 0, maximizing, i32::MIN, i32::MAX, &mut pruned_stats);
                assert_eq!(plain, pruned, "{layout} maximizing={maximizing}");
                assert!(pruned_stats.nodes <= plain_stats.nodes);
            }
        }
    }
}
