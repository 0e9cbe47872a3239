//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_arena::AgentKind;

/// Tic-tac-toe with a perfect-play minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe or ask the engine for a move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a series of games between two agents
    Play {
        /// Path to the arena configuration file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Agent for player A (X, moves first)
        #[arg(long, value_enum)]
        player_a: Option<AgentKind>,

        /// Agent for player B (O)
        #[arg(long, value_enum)]
        player_b: Option<AgentKind>,

        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Seed for random agents
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the engine's move for a position
    Suggest {
        /// Board layout, rows separated by '/', e.g. "XX./.O./..."
        #[arg(short, long)]
        board: String,

        /// Mark to move (inferred from the board, X first, when omitted)
        #[arg(short, long)]
        mark: Option<char>,

        /// Search without alpha-beta pruning
        #[arg(long)]
        no_pruning: bool,

        /// Emit the search report as JSON
        #[arg(long)]
        json: bool,
    },
}
