//! Puzzle tile value type

use crate::io::configuration::PUZZLE_ID_STRIDE;

/// A single puzzle piece with a current and a correct grid slot
///
/// Positions are row-major slot numbers in `[0, grid_size²)`. Only
/// `current_pos` changes during play; `correct_pos` is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Stable identity, unique within a board
    pub id: usize,
    /// Slot the tile currently occupies
    pub current_pos: usize,
    /// Slot the tile occupies when the puzzle is solved
    pub correct_pos: usize,
    /// Sub-puzzle the tile belongs to on multi-puzzle levels
    pub puzzle_index: Option<usize>,
}

impl Tile {
    /// Create a tile sitting in its correct slot
    pub const fn new(id: usize, correct_pos: usize, puzzle_index: Option<usize>) -> Self {
        Self {
            id,
            current_pos: correct_pos,
            correct_pos,
            puzzle_index,
        }
    }

    /// Create the tile for `correct_pos` of a sub-puzzle, deriving its id
    ///
    /// Ids are offset by [`PUZZLE_ID_STRIDE`] per puzzle index so tiles of
    /// different sub-puzzles never collide.
    pub const fn for_puzzle(correct_pos: usize, puzzle_index: Option<usize>) -> Self {
        let offset = match puzzle_index {
            Some(index) => index * PUZZLE_ID_STRIDE,
            None => 0,
        };
        Self::new(correct_pos + offset, correct_pos, puzzle_index)
    }

    /// Whether the tile rests in its solved slot
    pub const fn is_locked(&self) -> bool {
        self.current_pos == self.correct_pos
    }

    /// Whether both tiles belong to the same sub-puzzle
    pub fn same_puzzle(&self, other: &Self) -> bool {
        self.puzzle_index == other.puzzle_index
    }
}
