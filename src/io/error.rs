//! Error types for board, game and file operations

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for all puzzle operations
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// Grid dimension must be at least one
    #[error("Invalid grid size {grid_size}: a board needs at least one slot per side")]
    InvalidGridSize {
        /// Rejected grid dimension
        grid_size: usize,
    },

    /// Tile list does not cover the grid exactly
    #[error("Expected {expected} tiles for the grid, found {actual}")]
    TileCountMismatch {
        /// Number of slots on the board
        expected: usize,
        /// Number of tiles supplied
        actual: usize,
    },

    /// A current or correct position lies outside the board
    #[error("Tile {tile_id} refers to position {position}, outside a board of {slots} slots")]
    PositionOutOfRange {
        /// Identity of the offending tile
        tile_id: usize,
        /// The out-of-range position
        position: usize,
        /// Number of slots on the board
        slots: usize,
    },

    /// Two tiles claim the same slot
    #[error("Tiles {first} and {second} both occupy position {position}")]
    DuplicatePosition {
        /// Contested slot
        position: usize,
        /// Identity of the tile seen first
        first: usize,
        /// Identity of the tile seen second
        second: usize,
    },

    /// Two tiles claim the same solved slot
    #[error("Tiles {first} and {second} both belong at position {position}")]
    DuplicateCorrectPosition {
        /// Contested solved slot
        position: usize,
        /// Identity of the tile seen first
        first: usize,
        /// Identity of the tile seen second
        second: usize,
    },

    /// Two tiles share one identity
    #[error("Tile id {id} is used more than once")]
    DuplicateTileId {
        /// The repeated identity
        id: usize,
    },

    /// Tile index exceeds the tile list
    #[error("Tile index {index} is out of bounds (tiles: {tile_count})")]
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles on the board
        tile_count: usize,
    },

    /// Board position exceeds the grid
    #[error("Position {position} is out of bounds (slots: {slots})")]
    InvalidPosition {
        /// The invalid position
        position: usize,
        /// Number of slots on the board
        slots: usize,
    },

    /// A group move needs at least one tile
    #[error("Cannot displace an empty group")]
    EmptyGroup,

    /// Translating the group would push a tile off the board
    #[error("Group move would place a tile at row {row}, column {col} of a {grid_size}x{grid_size} board")]
    OffBoard {
        /// Row the tile would land on
        row: isize,
        /// Column the tile would land on
        col: isize,
        /// Grid dimension
        grid_size: usize,
    },

    /// Vacated and displaced slot counts disagree
    #[error("Displacement left {vacancies} vacancies for {victims} displaced tiles")]
    VacancyMismatch {
        /// Slots abandoned by the group
        vacancies: usize,
        /// Tiles pushed out of the group's destination
        victims: usize,
    },

    /// A locked tile cannot be moved
    #[error("Tile at index {index} is locked in its correct position")]
    TileLocked {
        /// Index of the locked tile
        index: usize,
    },

    /// Tiles from different sub-puzzles cannot be swapped
    #[error("Tiles {first} and {second} belong to different puzzles")]
    CrossPuzzle {
        /// Index of the first tile
        first: usize,
        /// Index of the second tile
        second: usize,
    },

    /// The session has already been won
    #[error("The game is already complete")]
    GameComplete,

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load a source image from the filesystem
    #[error("Failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        #[source]
        source: image::ImageError,
    },

    /// Failed to save a composed board image
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        #[source]
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl PuzzleError {
    /// Whether the error is a rejected move that leaves the board untouched
    ///
    /// Callers treat these as no-ops rather than failures.
    pub const fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            Self::OffBoard { .. }
                | Self::VacancyMismatch { .. }
                | Self::TileLocked { .. }
                | Self::CrossPuzzle { .. }
        )
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
