//! Tic-tac-toe arena: agents, the game loop and series statistics.
//!
//! # Architecture
//!
//! - **Agents**: anything implementing [`Agent`] - a person at the
//!   terminal, a random mover, or the minimax engine from `tictactoe_core`
//! - **Arena**: alternates two agents over a [`tictactoe_core::Game`] and
//!   tallies results across a series
//! - **Config**: TOML settings for seats, game count and seeding
//!
//! # Example
//!
//! ```
//! use tictactoe_arena::{Arena, MinimaxAgent, Winner};
//! use tictactoe_core::Pruning;
//!
//! let mut arena = Arena::new(
//!     Box::new(MinimaxAgent::new("Alpha", Pruning::AlphaBeta)),
//!     Box::new(MinimaxAgent::new("Beta", Pruning::None)),
//! );
//! assert_eq!(arena.play_game()?, Winner::Draw);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agents;
mod arena;
mod config;

pub use agents::{Agent, AgentKind, HumanAgent, MinimaxAgent, RandomAgent};
pub use arena::{Arena, Tally, Winner};
pub use config::{ArenaConfig, ConfigError, PlayerConfig};
