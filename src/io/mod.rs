/// Command-line interface and text output
pub mod cli;
/// Command script parsing
pub mod commands;
/// Maze size validation and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display for batch verification
pub mod progress;
