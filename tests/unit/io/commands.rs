//! Tests for command script parsing and formatting

#[cfg(test)]
mod tests {
    use arrowmaze::MazeError;
    use arrowmaze::io::commands::{format_commands, parse_commands, read_commands};
    use arrowmaze::spatial::grid::Direction::{Down, Left, Right, Up};
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Tests letter runs split into one command per letter
    // Verified by treating a run as a single token
    #[test]
    fn test_letter_runs() {
        assert_eq!(parse_commands("RRdl").unwrap(), vec![Right, Right, Down, Left]);
    }

    // Tests whole words, glyphs and comma separators mix freely
    // Verified by splitting on whitespace only
    #[test]
    fn test_mixed_notation() {
        assert_eq!(
            parse_commands("up, Down\n→↓  left,u").unwrap(),
            vec![Up, Down, Right, Down, Left, Up]
        );
    }

    // Tests blank input yields no commands
    // Verified by emitting empty tokens
    #[test]
    fn test_blank_input() {
        assert!(parse_commands("").unwrap().is_empty());
        assert!(parse_commands(" ,\n\t,, ").unwrap().is_empty());
    }

    // Tests the error names the offending token and its position
    // Verified by reporting the character offset instead
    #[test]
    fn test_invalid_token() {
        let error = parse_commands("R D rx L").unwrap_err();
        match error {
            MazeError::InvalidCommand { token, index } => {
                assert_eq!(token, "rx");
                assert_eq!(index, 2);
            }
            other => unreachable!("Expected InvalidCommand, got {other:?}"),
        }
    }

    // Tests formatting uses single letters
    // Verified by formatting with Debug names
    #[test]
    fn test_format_commands() {
        assert_eq!(format_commands(&[Up, Right, Down, Left]), "URDL");
        assert_eq!(format_commands(&[]), "");
        let round_trip = parse_commands(&format_commands(&[Left, Left, Down])).unwrap();
        assert_eq!(round_trip, vec![Left, Left, Down]);
    }

    // Tests scripts are read from disk
    // Verified by parsing the path instead of the content
    #[test]
    fn test_read_commands() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "right right").unwrap();
        writeln!(file, "D").unwrap();
        assert_eq!(read_commands(file.path()).unwrap(), vec![Right, Right, Down]);
    }

    // Tests a missing script reports the path and operation
    // Verified by mapping read failures to InvalidCommand
    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        match read_commands(&missing).unwrap_err() {
            MazeError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path, missing);
                assert_eq!(operation, "read commands");
            }
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
    }
}
