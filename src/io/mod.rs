//! Input/output: command line, configuration, errors, images and progress

/// Command-line interface and subcommand runners
pub mod cli;
/// Game constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Tile atlases and board image export
pub mod image;
/// Simulation progress display
pub mod progress;
