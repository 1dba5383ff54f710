//! Tile grouping and group displacement engine for swap-based jigsaw puzzles
//!
//! A board holds one tile per slot. Tiles that sit next to each other exactly
//! as they do in the solved picture form rigid groups, which can be dragged as
//! a unit while displaced tiles fill the slots the group leaves behind. A small
//! game layer (levels, sessions, records and a greedy bot) sits on top.

#![forbid(unsafe_code)]

/// Board model, grouping, displacement and move primitives
pub mod board;
/// Levels, sessions, records and the greedy solver
pub mod game;
/// Input/output operations and error handling
pub mod io;

pub use board::{Board, Tile};
pub use io::error::{PuzzleError, Result};
