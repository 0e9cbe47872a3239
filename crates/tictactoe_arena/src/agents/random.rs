//! Agent that plays uniformly random legal moves.

use super::Agent;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tictactoe_core::{Board, Mark, Position};
use tracing::debug;

/// Picks any empty square with equal probability.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Creates a random agent seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible random agent.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, board: &Board, _mark: Mark) -> Result<Position> {
        let moves = board.legal_moves();
        let Some(&position) = moves.choose(&mut self.rng) else {
            anyhow::bail!("No valid moves available for {}", self.name);
        };
        debug!(agent = %self.name, %position, "Random agent chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
