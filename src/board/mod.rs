//! Board model and the tile grouping and displacement engine
//!
//! This module contains the board-level functionality:
//! - Tile values and the validated board with its slot map
//! - Rigid group discovery
//! - Group displacement
//! - Swap, win check and shuffle primitives

/// Group displacement preserving one tile per slot
pub mod displacement;
/// Rigid-neighbor group discovery
pub mod groups;
/// Board state and coordinate helpers
pub mod layout;
/// Swap, win check and shuffle primitives
pub mod moves;
/// Tile value type
pub mod tile;

pub use layout::Board;
pub use tile::Tile;
