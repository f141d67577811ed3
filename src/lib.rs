//! Perfect maze generation and arrow-command path tracing
//!
//! The engine builds a randomized spanning-tree maze over a small grid,
//! describes its closed walls as line segments for an external renderer, and
//! replays directional commands from an arrow classifier against the maze,
//! dropping moves that hit walls and reporting whether the exit was reached.

#![forbid(unsafe_code)]

/// Maze generation, command tracing and round lifecycle
pub mod algorithm;
/// Structural analysis of generated mazes
pub mod analysis;
/// Command-line interface, command input, configuration and errors
pub mod io;
/// Grid addressing and output geometry
pub mod spatial;

pub use algorithm::generator::{Maze, MazeGenerator, generate};
pub use algorithm::session::{Session, Snapshot};
pub use algorithm::tracer::{Trace, trace};
pub use io::configuration::Configuration;
pub use io::error::{MazeError, Result};
pub use spatial::{Direction, LineSegment, Position, WallId};
