//! Round lifecycle of the arrow maze game
//!
//! A round is one maze plus the trace of every command observed for it. The
//! session owns the only mutable state; readers receive [`Snapshot`] values
//! that share the maze through an `Arc` and are never touched again, so a
//! display loop can keep drawing the previous round while the next is built.

use std::sync::Arc;

use rand::Rng;

use crate::algorithm::generator::{Maze, generate};
use crate::algorithm::tracer::{Trace, trace};
use crate::io::configuration::Configuration;
use crate::io::error::Result;
use crate::spatial::grid::Direction;

/// Immutable view of one round, safe to hand to another thread
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Round number, starting at 1
    pub round: u64,
    /// Maze of this round
    pub maze: Arc<Maze>,
    /// Trace of the commands observed so far
    pub trace: Trace,
}

impl Snapshot {
    /// Whether the trace reached the exit
    pub const fn is_solved(&self) -> bool {
        self.trace.is_solved()
    }
}

/// Game state across rounds, driven by an injected random source
pub struct Session<R: Rng> {
    rng: R,
    config: Configuration,
    maze: Arc<Maze>,
    commands: Vec<Direction>,
    trace: Trace,
    round: u64,
}

impl<R: Rng> Session<R> {
    /// Start round 1 with a freshly generated maze
    pub fn new(config: Configuration, mut rng: R) -> Self {
        let maze = Arc::new(generate(config, &mut rng));
        let trace = trace(&maze, &[]);
        log::info!("Round 1: {}x{} maze", config.width(), config.height());
        Self {
            rng,
            config,
            maze,
            commands: Vec::new(),
            trace,
            round: 1,
        }
    }

    /// Replace the command history with everything currently observed
    pub fn observe(&mut self, commands: &[Direction]) -> &Trace {
        self.commands.clear();
        self.commands.extend_from_slice(commands);
        self.retrace()
    }

    /// Append a batch of commands to the history
    pub fn extend(&mut self, commands: &[Direction]) -> &Trace {
        self.commands.extend_from_slice(commands);
        self.retrace()
    }

    /// Start a new round at the current size
    pub fn next_round(&mut self) {
        self.regenerate();
    }

    /// Start a new round at a different size
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Configuration`](crate::MazeError::Configuration)
    /// for an invalid size, leaving the current round untouched
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.config = Configuration::new(width, height)?;
        self.regenerate();
        Ok(())
    }

    /// Current round number
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Current maze size
    pub const fn config(&self) -> Configuration {
        self.config
    }

    /// Maze of the current round
    pub const fn maze(&self) -> &Arc<Maze> {
        &self.maze
    }

    /// Trace of the current command history
    pub const fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Command history of the current round
    pub fn commands(&self) -> &[Direction] {
        &self.commands
    }

    /// Whether the current round has been solved
    pub const fn is_solved(&self) -> bool {
        self.trace.is_solved()
    }

    /// Publish the current round
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round,
            maze: Arc::clone(&self.maze),
            trace: self.trace.clone(),
        }
    }

    fn retrace(&mut self) -> &Trace {
        let was_solved = self.trace.is_solved();
        self.trace = trace(&self.maze, &self.commands);
        if self.trace.is_solved() && !was_solved {
            log::info!("Round {} solved after {} commands", self.round, self.commands.len());
        }
        &self.trace
    }

    fn regenerate(&mut self) {
        self.round += 1;
        self.maze = Arc::new(generate(self.config, &mut self.rng));
        self.commands.clear();
        self.trace = trace(&self.maze, &[]);
        log::info!("Round {}: {}x{} maze", self.round, self.config.width(), self.config.height());
    }
}
