//! Tests for error messages and source chaining

#[cfg(test)]
mod tests {
    use arrowmaze::MazeError;
    use arrowmaze::io::error::invalid_configuration;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests configuration errors name the parameter, value and reason
    // Verified by omitting the reason from Display
    #[test]
    fn test_configuration_display() {
        let error = invalid_configuration("width", 0, &"must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid configuration 'width' = 0: must be at least 1"
        );
        assert!(error.source().is_none());
    }

    // Tests wall and command errors render their context
    // Verified by printing the wall index as a cell index
    #[test]
    fn test_input_error_display() {
        let wall = MazeError::InvalidWall {
            wall: 3,
            width: 2,
            height: 2,
        };
        assert_eq!(
            wall.to_string(),
            "Wall 3 does not separate two cells of a 2x2 grid"
        );

        let command = MazeError::InvalidCommand {
            token: "x".to_string(),
            index: 4,
        };
        assert_eq!(
            command.to_string(),
            "Unrecognised command 'x' at position 4"
        );

        let direction = MazeError::InvalidDirection {
            token: "north".to_string(),
        };
        assert_eq!(direction.to_string(), "Unrecognised direction 'north'");
        assert!(direction.source().is_none());
    }

    // Tests the verification failure message carries the seed
    // Verified by dropping the seed from the message
    #[test]
    fn test_not_perfect_display() {
        let error = MazeError::NotPerfect {
            seed: 42,
            passages: 5,
            reachable: 4,
            cells: 6,
        };
        let message = error.to_string();
        assert!(message.contains("seed 42"));
        assert!(message.contains("4/6 cells reachable"));
    }

    // Tests file system errors expose the io error as source
    // Verified by returning None from source
    #[test]
    fn test_file_system_source() {
        let error = MazeError::FileSystem {
            path: PathBuf::from("moves.txt"),
            operation: "read commands",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(error.to_string().contains("read commands on 'moves.txt'"));
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "gone");
    }
}
