//! Agent trait and implementations.

mod human;
mod minimax;
mod random;

pub use human::HumanAgent;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, Mark, Position, Pruning};

/// Anything that can produce a move for a board.
pub trait Agent {
    /// Chooses a move for `mark` on a board that is still in play.
    ///
    /// The returned position should be empty; the arena rejects it otherwise.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<Position>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;

    /// Clears per-game state before a new game starts.
    fn reset(&mut self) {}
}

/// Agent variants selectable from configuration or the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AgentKind {
    /// Moves typed on standard input.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// Plain minimax.
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

impl AgentKind {
    /// Checks if this kind reads moves from a person.
    pub fn is_human(self) -> bool {
        matches!(self, AgentKind::Human)
    }

    /// Builds an agent of this kind.
    ///
    /// `seed` makes random agents reproducible; other kinds ignore it.
    pub fn build(self, name: &str, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Human => Box::new(HumanAgent::stdio(name)),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(name, seed)),
                None => Box::new(RandomAgent::new(name)),
            },
            AgentKind::Minimax => Box::new(MinimaxAgent::new(name, Pruning::None)),
            AgentKind::AlphaBeta => Box::new(MinimaxAgent::new(name, Pruning::AlphaBeta)),
        }
    }
}
