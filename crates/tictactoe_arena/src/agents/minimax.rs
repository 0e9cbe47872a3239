//! Perfect-play agent backed by the search engine.

use super::Agent;
use anyhow::Result;
use tictactoe_core::{Board, Mark, Position, Pruning, SearchEngine};
use tracing::{debug, instrument};

/// Agent that always plays a minimax-optimal move.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
    pruning: Pruning,
}

impl MinimaxAgent {
    /// Creates a new minimax agent.
    pub fn new(name: impl Into<String>, pruning: Pruning) -> Self {
        Self {
            name: name.into(),
            pruning,
        }
    }

    /// Returns the recursion this agent runs.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }
}

impl Agent for MinimaxAgent {
    #[instrument(skip(self, board), fields(agent = %self.name, pruning = %self.pruning))]
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<Position> {
        let report = SearchEngine::analyze(board, mark, mark.opponent(), self.pruning)?;
        debug!(
            position = %report.best_move(),
            score = report.score(),
            nodes = report.nodes(),
            "Minimax chose position"
        );
        Ok(*report.best_move())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
