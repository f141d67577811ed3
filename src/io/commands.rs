//! Textual command scripts standing in for the arrow classifier
//!
//! Tokens are separated by whitespace or commas. A token is either a whole
//! direction word (`up`, `Down`, ...) or a run of single-letter or glyph
//! directions such as `RRD` or `→→↓`.

use std::path::Path;

use crate::io::error::{MazeError, Result};
use crate::spatial::grid::Direction;

/// Parse a command script
///
/// # Errors
///
/// Returns [`MazeError::InvalidCommand`] naming the first token that is not a
/// direction word and contains a character that is not a direction
pub fn parse_commands(text: &str) -> Result<Vec<Direction>> {
    let mut commands = Vec::new();
    let tokens = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty());

    for (index, token) in tokens.enumerate() {
        if let Some(direction) = Direction::from_token(token) {
            commands.push(direction);
            continue;
        }
        for symbol in token.chars() {
            let mut buffer = [0; 4];
            let direction = Direction::from_token(symbol.encode_utf8(&mut buffer)).ok_or_else(
                || MazeError::InvalidCommand {
                    token: token.to_string(),
                    index,
                },
            )?;
            commands.push(direction);
        }
    }

    Ok(commands)
}

/// Read and parse a command script file
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] if the file cannot be read, or
/// [`MazeError::InvalidCommand`] if its content does not parse
pub fn read_commands(path: &Path) -> Result<Vec<Direction>> {
    let text = std::fs::read_to_string(path).map_err(|source| MazeError::FileSystem {
        path: path.to_path_buf(),
        operation: "read commands",
        source,
    })?;
    parse_commands(&text)
}

/// Render commands in single-letter notation
pub fn format_commands(commands: &[Direction]) -> String {
    commands.iter().map(|direction| direction.letter()).collect()
}
