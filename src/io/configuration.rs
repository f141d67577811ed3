//! Maze size configuration and runtime defaults

use crate::io::error::{Result, invalid_configuration};
use crate::spatial::grid::GridDimensions;

/// Default maze width in cells (the demo board is square)
pub const DEFAULT_WIDTH: usize = 8;
/// Default maze height in cells
pub const DEFAULT_HEIGHT: usize = 8;

// Bounds allocation of the cell and wall bitsets
/// Maximum allowed maze side length
pub const MAX_MAZE_DIMENSION: usize = 256;

/// Default number of mazes generated by the `check` command
pub const DEFAULT_CHECK_ROUNDS: usize = 1000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Validated maze size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Configuration {
    width: usize,
    height: usize,
}

impl Configuration {
    /// Validate a maze size
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Configuration`](crate::MazeError::Configuration)
    /// if either side is zero or exceeds [`MAX_MAZE_DIMENSION`]
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_side("width", width)?;
        check_side("height", height)?;
        Ok(Self { width, height })
    }

    /// Maze width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Maze height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid addressing for this size
    pub const fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.width, self.height)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

fn check_side(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_configuration(parameter, value, &"must be at least 1"));
    }
    if value > MAX_MAZE_DIMENSION {
        return Err(invalid_configuration(
            parameter,
            value,
            &format!("must not exceed {MAX_MAZE_DIMENSION}"),
        ));
    }
    Ok(())
}
