//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use jigsolitaire::PuzzleError;
    use jigsolitaire::io::error::invalid_parameter;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PuzzleError::FileSystem {
            path: "/tmp/pic.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/pic.png"));
    }

    // Tests off-board errors report the landing cell
    // Verified by omitting the column from the message
    #[test]
    fn test_off_board_message() {
        let error = PuzzleError::OffBoard {
            row: 0,
            col: 3,
            grid_size: 3,
        };

        let message = error.to_string();
        assert!(message.contains("row 0"));
        assert!(message.contains("column 3"));
        assert!(message.contains("3x3"));
    }

    // Tests contested solved slots name both tiles
    // Verified by swapping the tile ids in the message
    #[test]
    fn test_duplicate_correct_position_message() {
        let error = PuzzleError::DuplicateCorrectPosition {
            position: 4,
            first: 2,
            second: 7,
        };

        assert_eq!(
            error.to_string(),
            "Tiles 2 and 7 both belong at position 4"
        );
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("grid_size", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("grid_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests rejected moves are classified separately from faults
    // Verified by classifying every error as an illegal move
    #[test]
    fn test_is_illegal_move() {
        assert!(PuzzleError::TileLocked { index: 1 }.is_illegal_move());
        assert!(
            PuzzleError::CrossPuzzle {
                first: 0,
                second: 1
            }
            .is_illegal_move()
        );
        assert!(
            PuzzleError::VacancyMismatch {
                vacancies: 1,
                victims: 2
            }
            .is_illegal_move()
        );
        assert!(!PuzzleError::EmptyGroup.is_illegal_move());
        assert!(!PuzzleError::GameComplete.is_illegal_move());
        assert!(
            !PuzzleError::InvalidTileIndex {
                index: 9,
                tile_count: 9
            }
            .is_illegal_move()
        );
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = PuzzleError::ImageExport {
            path: "/readonly/out.png".into(),
            source: image_error,
        };

        assert!(error.to_string().contains("access denied"));
        assert!(error.source().is_some());
    }
}
