//! Replay of arrow commands against a maze
//!
//! Commands come from a noisy shape classifier, so a move that would leave
//! the grid or cross a closed wall is dropped and tracing continues with the
//! next command. The trace is a pure function of the maze and the full
//! command history; callers retrace from scratch whenever the history grows.

use crate::algorithm::generator::Maze;
use crate::spatial::geometry::LineSegment;
use crate::spatial::grid::{Direction, Position};

/// Result of replaying a command sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    path: Vec<Position>,
    segments: Vec<LineSegment>,
    dropped: usize,
    solved: bool,
}

impl Trace {
    /// Step segments between cell centres, in cell units
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Cells visited in order, starting with the entrance
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Final position of the token
    pub fn position(&self) -> Position {
        self.path.last().copied().unwrap_or_default()
    }

    /// Number of commands that did not move the token
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Whether the final position is the maze exit
    pub const fn is_solved(&self) -> bool {
        self.solved
    }
}

/// Replay `commands` from the entrance of `maze`
pub fn trace(maze: &Maze, commands: &[Direction]) -> Trace {
    let dimensions = maze.dimensions();
    let mut current = maze.entrance();
    let mut path = Vec::with_capacity(commands.len() + 1);
    let mut segments = Vec::with_capacity(commands.len());
    let mut dropped = 0;
    path.push(current);

    for (index, &direction) in commands.iter().enumerate() {
        let next = match dimensions.step(current, direction) {
            Some(next) if maze.is_passable(current, next) => next,
            Some(_) => {
                log::debug!("Command {index} ({direction}) from {current} blocked by a wall");
                dropped += 1;
                continue;
            }
            None => {
                log::debug!("Command {index} ({direction}) from {current} leaves the grid");
                dropped += 1;
                continue;
            }
        };

        segments.push(LineSegment::between_cells(current, next));
        path.push(next);
        current = next;
    }

    Trace {
        path,
        segments,
        dropped,
        solved: current == maze.exit(),
    }
}
