//! Error types for maze configuration, construction and command input

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
///
/// Moves that hit a wall or leave the grid are not errors; the tracer drops
/// them silently.
#[derive(Debug)]
pub enum MazeError {
    /// Maze size validation failed
    Configuration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: usize,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Passage list names a wall that does not separate two cells
    InvalidWall {
        /// The offending wall number
        wall: usize,
        /// Grid width the wall was checked against
        width: usize,
        /// Grid height the wall was checked against
        height: usize,
    },

    /// Command text contains something that is not a direction
    InvalidCommand {
        /// The unrecognised token
        token: String,
        /// Zero-based index of the token in the input
        index: usize,
    },

    /// A single direction token, parsed outside any script, is not a direction
    InvalidDirection {
        /// The unrecognised token
        token: String,
    },

    /// Generated maze violates the spanning-tree property
    NotPerfect {
        /// Seed the maze was generated from
        seed: u64,
        /// Number of open walls found
        passages: usize,
        /// Number of cells reachable from the entrance
        reachable: usize,
        /// Number of cells in the grid
        cells: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = {value}: {reason}")
            }
            Self::InvalidWall {
                wall,
                width,
                height,
            } => {
                write!(
                    f,
                    "Wall {wall} does not separate two cells of a {width}x{height} grid"
                )
            }
            Self::InvalidCommand { token, index } => {
                write!(f, "Unrecognised command '{token}' at position {index}")
            }
            Self::InvalidDirection { token } => {
                write!(f, "Unrecognised direction '{token}'")
            }
            Self::NotPerfect {
                seed,
                passages,
                reachable,
                cells,
            } => {
                write!(
                    f,
                    "Maze from seed {seed} is not perfect: {passages} passages, {reachable}/{cells} cells reachable"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: usize,
    reason: &impl ToString,
) -> MazeError {
    MazeError::Configuration {
        parameter,
        value,
        reason: reason.to_string(),
    }
}
