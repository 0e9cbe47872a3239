//! Game orchestration between two agents.

use crate::agents::Agent;
use anyhow::{Context, Result};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tictactoe_core::{Game, Mark, Outcome};
use tracing::{debug, info, instrument};

/// Result of one game, from the arena's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// Nobody completed a line.
    Draw,
    /// Player A (X, moves first) won.
    PlayerA,
    /// Player B (O) won.
    PlayerB,
}

/// Running totals over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Games played.
    games: u32,
    /// Drawn games.
    draws: u32,
    /// Games won by player A.
    player_a: u32,
    /// Games won by player B.
    player_b: u32,
}

impl Tally {
    /// Adds one finished game.
    pub fn record(&mut self, winner: Winner) {
        self.games += 1;
        match winner {
            Winner::Draw => self.draws += 1,
            Winner::PlayerA => self.player_a += 1,
            Winner::PlayerB => self.player_b += 1,
        }
    }

    /// Multi-line summary naming both players.
    pub fn summary(&self, player_a: &str, player_b: &str) -> String {
        format!(
            "{player_a} vs {player_b}\n\
             Number of games: {}\n\
             Draw: {}\n\
             {player_a} wins: {}\n\
             {player_b} wins: {}",
            self.games, self.draws, self.player_a, self.player_b
        )
    }
}

/// Plays games between two agents: A holds X and opens, B holds O.
pub struct Arena {
    game: Game,
    player_a: Box<dyn Agent>,
    player_b: Box<dyn Agent>,
    display: Option<Box<dyn Write>>,
}

impl Arena {
    /// Creates a new arena.
    pub fn new(player_a: Box<dyn Agent>, player_b: Box<dyn Agent>) -> Self {
        Self {
            game: Game::new(Mark::X),
            player_a,
            player_b,
            display: None,
        }
    }

    /// Prints the board to `out` after every move.
    pub fn with_display(mut self, out: impl Write + 'static) -> Self {
        self.display = Some(Box::new(out));
        self
    }

    /// Returns the names of player A and player B.
    pub fn names(&self) -> (&str, &str) {
        (self.player_a.name(), self.player_b.name())
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays one game from an empty board to the end.
    ///
    /// # Errors
    ///
    /// Fails if an agent cannot produce a move or produces an illegal one.
    /// The offending move is never corrected or replaced.
    #[instrument(skip(self), fields(player_a = %self.player_a.name(), player_b = %self.player_b.name()))]
    pub fn play_game(&mut self) -> Result<Winner> {
        self.game.reset();
        self.player_a.reset();
        self.player_b.reset();

        loop {
            let mark = self.game.to_move();
            let agent = match mark {
                Mark::X => &mut self.player_a,
                Mark::O => &mut self.player_b,
            };

            let board = *self.game.board();
            let position = agent
                .choose_move(&board, mark)
                .with_context(|| format!("{} failed to choose a move", agent.name()))?;
            let status = self
                .game
                .play(position)
                .with_context(|| format!("{} played an illegal move", agent.name()))?;
            debug!(agent = %agent.name(), %mark, %position, "Move made");

            if let Some(out) = self.display.as_mut() {
                writeln!(out, "{} ({}) plays {}", agent.name(), mark, position)?;
                writeln!(out, "{}\n", self.game.board())?;
            }

            let winner = match status {
                Outcome::Ongoing => continue,
                Outcome::Draw => Winner::Draw,
                Outcome::Win(Mark::X) => Winner::PlayerA,
                Outcome::Win(Mark::O) => Winner::PlayerB,
            };
            if let Some(out) = self.display.as_mut() {
                match status.winner() {
                    Some(_) => writeln!(out, "{} won!", agent.name())?,
                    None => writeln!(out, "It's a draw!")?,
                }
            }
            info!(?winner, "Game over");
            return Ok(winner);
        }
    }

    /// Plays `games` games in a row and tallies the results.
    ///
    /// # Errors
    ///
    /// Stops at the first game that fails.
    #[instrument(skip(self))]
    pub fn play_series(&mut self, games: u32) -> Result<Tally> {
        let mut tally = Tally::default();
        for round in 1..=games {
            let winner = self
                .play_game()
                .with_context(|| format!("Game {round} of {games} aborted"))?;
            tally.record(winner);
        }
        info!(
            games = tally.games,
            draws = tally.draws,
            player_a = tally.player_a,
            player_b = tally.player_b,
            "Series complete"
        );
        Ok(tally)
    }
}
