//! Exhaustive adversarial search.
//!
//! The engine scores every legal move by running minimax to the end of the
//! game (at most 9 plies, so no depth limit is needed) and returns the move
//! with the strictly greatest score, the first one in canonical order on
//! ties. Two interchangeable recursions back the search:
//!
//! - [`Pruning::None`] - plain minimax, visiting every node;
//! - [`Pruning::AlphaBeta`] - the same values with provably irrelevant
//!   siblings skipped.
//!
//! Both produce the same move for every position. Each root candidate is
//! searched with a fresh, unbounded window so the pruned scores are exact
//! rather than bounds, which keeps the tie-break identical.
//!
//! Every recursion frame owns the board copy it explores; the caller's
//! board is never mutated.

mod alpha_beta;
mod minimax;

use crate::error::SearchError;
use crate::{Board, Mark, Outcome, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Score of a win found at depth 0.
///
/// Wins score `WIN_SCORE - depth`, losses `depth - WIN_SCORE`, draws 0, so
/// faster wins and slower losses are preferred.
pub const WIN_SCORE: i32 = 10;

/// Which recursion the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pruning {
    /// Plain minimax.
    None,
    /// Minimax with alpha-beta cutoffs.
    #[default]
    AlphaBeta,
}

impl From<bool> for Pruning {
    fn from(use_pruning: bool) -> Self {
        if use_pruning {
            Pruning::AlphaBeta
        } else {
            Pruning::None
        }
    }
}

impl std::fmt::Display for Pruning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pruning::None => write!(f, "minimax"),
            Pruning::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

/// A root move together with its backed-up score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The move.
    pub position: Position,
    /// Minimax value of the move for the mover.
    pub score: i32,
}

/// Everything one search produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Selected move.
    best_move: Position,
    /// Score of the selected move.
    score: i32,
    /// Nodes visited below the root.
    nodes: u64,
    /// Recursion used.
    pruning: Pruning,
    /// Root moves in the order they were scored.
    ///
    /// Stops at the first immediate win; empty when only one move existed.
    candidates: Vec<Candidate>,
}

/// Scoring frame shared by both recursions.
#[derive(Debug, Clone, Copy)]
struct Perspective {
    mover: Mark,
    opponent: Mark,
}

impl Perspective {
    /// Score of a terminal board, or `None` while the game goes on.
    fn terminal_score(&self, board: &Board, depth: i32) -> Option<i32> {
        match board.outcome() {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(0),
            Outcome::Win(mark) if mark == self.mover => Some(WIN_SCORE - depth),
            Outcome::Win(_) => Some(depth - WIN_SCORE),
        }
    }

    /// Mark placed at a node: the mover's when maximizing.
    fn mark_for(&self, maximizing: bool) -> Mark {
        if maximizing { self.mover } else { self.opponent }
    }
}

/// Node counter threaded through a recursion.
#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
}

/// Minimax move selection for the automated player.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine;

impl SearchEngine {
    /// Picks the optimal move for `mover` against `opponent`.
    ///
    /// # Errors
    ///
    /// Fails only when called out of sequence: [`SearchError::ExhaustedMoves`]
    /// on a board without empty squares, [`SearchError::GameOver`] on a won
    /// board that still has empty squares, [`SearchError::SameMark`] with
    /// identical marks.
    pub fn choose_move(
        board: &Board,
        mover: Mark,
        opponent: Mark,
        use_pruning: bool,
    ) -> Result<Position, SearchError> {
        Self::analyze(board, mover, opponent, use_pruning.into()).map(|report| report.best_move)
    }

    /// Runs the search and returns the full report.
    ///
    /// # Errors
    ///
    /// Same as [`SearchEngine::choose_move`].
    #[instrument(level = "debug", skip(board), fields(filled = board.filled()))]
    pub fn analyze(
        board: &Board,
        mover: Mark,
        opponent: Mark,
        pruning: Pruning,
    ) -> Result<SearchReport, SearchError> {
        if mover == opponent {
            return Err(SearchError::SameMark { mark: mover });
        }
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::ExhaustedMoves);
        }
        let outcome = board.outcome();
        if outcome.is_terminal() {
            return Err(SearchError::GameOver { outcome });
        }
        let side = Perspective { mover, opponent };

        if let [only] = moves.as_slice() {
            // The last empty square always ends the game.
            let score = side
                .terminal_score(&board.with_move(*only, mover), 0)
                .unwrap_or_default();
            debug!(position = %only, score, "Single legal move");
            return Ok(SearchReport {
                best_move: *only,
                score,
                nodes: 0,
                pruning,
                candidates: Vec::new(),
            });
        }

        let mut stats = SearchStats::default();
        let mut best: Option<Candidate> = None;
        let mut candidates = Vec::with_capacity(moves.len());

        for position in moves {
            let child = board.with_move(position, mover);
            let score = match pruning {
                Pruning::None => minimax::value(&child, side, 0, false, &mut stats),
                Pruning::AlphaBeta => {
                    alpha_beta::value(&child, side, 0, false, i32::MIN, i32::MAX, &mut stats)
                }
            };
            trace!(%position, score, "Scored candidate");

            let candidate = Candidate { position, score };
            candidates.push(candidate);
            if best.is_none_or(|b| score > b.score) {
                best = Some(candidate);
            }
            if score == WIN_SCORE {
                break;
            }
        }

        let best = best.ok_or(SearchError::ExhaustedMoves)?;
        debug!(
            position = %best.position,
            score = best.score,
            nodes = stats.nodes,
            %pruning,
            "Search complete"
        );

        Ok(SearchReport {
            best_move: best.position,
            score: best.score,
            nodes: stats.nodes,
            pruning,
            candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores_prefer_speed() {
        let side = Perspective {
            mover: Mark::X,
            opponent: Mark::O,
        };
        let x_wins = board("XXX/OO./...");
        let o_wins = board("OOO/XX./X..");
        assert_eq!(side.terminal_score(&x_wins, 0), Some(10));
        assert_eq!(side.terminal_score(&x_wins, 3), Some(7));
        assert_eq!(side.terminal_score(&o_wins, 3), Some(-7));
        assert_eq!(side.terminal_score(&board("XOX/OXX/OXO"), 5), Some(0));
        assert_eq!(side.terminal_score(&Board::new(), 0), None);
    }

    #[test]
    fn test_immediate_win_stops_scan() {
        // X to move; the top-right square wins at once so later squares are
        // never scored.
        let report =
            SearchEngine::analyze(&board("XX./.O./..."), Mark::X, Mark::O, Pruning::None)
                .unwrap();
        assert_eq!(*report.best_move(), Position::TopRight);
        assert_eq!(*report.score(), WIN_SCORE);
        assert_eq!(report.candidates().last().map(|c| c.position), Some(Position::TopRight));
    }

    #[test]
    fn test_single_move_skips_search() {
        let report =
            SearchEngine::analyze(&board("XOX/XOO/OX."), Mark::X, Mark::O, Pruning::AlphaBeta)
                .unwrap();
        assert_eq!(*report.best_move(), Position::BottomRight);
        assert_eq!(*report.nodes(), 0);
        assert_eq!(*report.score(), 0);
    }

    #[test]
    fn test_rejects_same_mark() {
        let err = SearchEngine::choose_move(&Board::new(), Mark::O, Mark::O, true).unwrap_err();
        assert_eq!(err, SearchError::SameMark { mark: Mark::O });
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let plain = SearchEngine::analyze(&Board::new(), Mark::X, Mark::O, Pruning::None).unwrap();
        let pruned =
            SearchEngine::analyze(&Board::new(), Mark::X, Mark::O, Pruning::AlphaBeta).unwrap();
        assert_eq!(plain.best_move(), pruned.best_move());
        assert_eq!(plain.score(), pruned.score());
        assert!(pruned.nodes() < plain.nodes());
    }
}
