//! Human player that types moves.

use super::Agent;
use anyhow::{Context, Result};
use std::io::{BufRead, StdinLock, Stdout, Write};
use tictactoe_core::{Board, Mark, Position};
use tracing::debug;

/// Human player reading two-letter position codes line by line.
///
/// Unknown codes and occupied squares are reported back and the player is
/// asked again; only a closed input ends the prompt with an error.
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanAgent<StdinLock<'static>, Stdout> {
    /// Creates a human player on the process's standard input and output.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    /// Creates a human player on arbitrary streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the agent, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<Position> {
        loop {
            write!(
                self.output,
                "{} ({}), choose your move (e.g. HG, MM, BD): ",
                self.name, mark
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} chose a move", self.name);
            }

            match Position::parse(&line) {
                None => {
                    debug!(input = %line.trim(), "Unrecognized move");
                    writeln!(self.output, "Invalid move. Please try again.")?;
                }
                Some(position) if !board.is_legal(position) => {
                    writeln!(self.output, "Square {position} is already taken, try another one.")?;
                }
                Some(position) => return Ok(position),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
