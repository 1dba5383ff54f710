//! Board state with a dense position-to-tile slot map
//!
//! The tile list is an arena: indices handed out by the board stay valid for
//! its whole lifetime and the list is never re-sorted. A separate slot map
//! records which tile index occupies every `[row, col]`, so neighbor lookups
//! are O(1) and the bijection invariant can be checked directly.

use std::collections::HashSet;
use std::fmt;

use ndarray::Array2;

use crate::board::tile::Tile;
use crate::io::error::{PuzzleError, Result};

/// Split a row-major position into `(row, col)`
pub const fn row_col(position: usize, grid_size: usize) -> (usize, usize) {
    (position / grid_size, position % grid_size)
}

/// Join `(row, col)` into a row-major position
pub const fn position(row: usize, col: usize, grid_size: usize) -> usize {
    row * grid_size + col
}

/// Number of slots on a board of the given dimension
///
/// # Errors
///
/// Returns an error if the dimension is zero or its square overflows
pub fn slot_count(grid_size: usize) -> Result<usize> {
    if grid_size == 0 {
        return Err(PuzzleError::InvalidGridSize { grid_size });
    }
    grid_size
        .checked_mul(grid_size)
        .ok_or(PuzzleError::InvalidGridSize { grid_size })
}

/// Square puzzle board holding exactly one tile per slot
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid_size: usize,
    tiles: Vec<Tile>,
    /// Tile index occupying each `[row, col]`
    slots: Array2<usize>,
}

impl Board {
    /// Build a board from a tile list, validating every invariant
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `grid_size` is zero
    /// - The tile count differs from `grid_size²`
    /// - A current or correct position lies outside the board
    /// - Two tiles share a current position, a correct position or an id
    pub fn new(grid_size: usize, tiles: Vec<Tile>) -> Result<Self> {
        let slots_total = slot_count(grid_size)?;
        if tiles.len() != slots_total {
            return Err(PuzzleError::TileCountMismatch {
                expected: slots_total,
                actual: tiles.len(),
            });
        }

        let mut occupants: Vec<Option<usize>> = vec![None; slots_total];
        let mut owners: Vec<Option<usize>> = vec![None; slots_total];
        let mut ids = HashSet::with_capacity(tiles.len());

        for (index, tile) in tiles.iter().enumerate() {
            for position in [tile.current_pos, tile.correct_pos] {
                if position >= slots_total {
                    return Err(PuzzleError::PositionOutOfRange {
                        tile_id: tile.id,
                        position,
                        slots: slots_total,
                    });
                }
            }

            if !ids.insert(tile.id) {
                return Err(PuzzleError::DuplicateTileId { id: tile.id });
            }

            match owners.get_mut(tile.correct_pos) {
                Some(Some(first)) => {
                    return Err(PuzzleError::DuplicateCorrectPosition {
                        position: tile.correct_pos,
                        first: *first,
                        second: tile.id,
                    });
                }
                Some(slot) => *slot = Some(tile.id),
                None => {
                    return Err(PuzzleError::InvalidPosition {
                        position: tile.correct_pos,
                        slots: slots_total,
                    });
                }
            }

            match occupants.get_mut(tile.current_pos) {
                Some(Some(first)) => {
                    let first_id = tiles.get(*first).map_or(*first, |t| t.id);
                    return Err(PuzzleError::DuplicatePosition {
                        position: tile.current_pos,
                        first: first_id,
                        second: tile.id,
                    });
                }
                Some(slot) => *slot = Some(index),
                None => {
                    return Err(PuzzleError::InvalidPosition {
                        position: tile.current_pos,
                        slots: slots_total,
                    });
                }
            }
        }

        // Equal counts and no duplicates leave every slot filled
        let mut slots: Array2<usize> = Array2::zeros((grid_size, grid_size));
        for (position, occupant) in occupants.into_iter().enumerate() {
            let (row, col) = row_col(position, grid_size);
            if let (Some(index), Some(cell)) = (occupant, slots.get_mut([row, col])) {
                *cell = index;
            }
        }

        Ok(Self {
            grid_size,
            tiles,
            slots,
        })
    }

    /// Build a solved board whose tiles satisfy `current_pos == correct_pos`
    ///
    /// Tile ids equal their correct position, offset per sub-puzzle when a
    /// puzzle index is given.
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_size` is zero
    pub fn solved(grid_size: usize, puzzle_index: Option<usize>) -> Result<Self> {
        let tiles = (0..slot_count(grid_size)?)
            .map(|position| Tile::for_puzzle(position, puzzle_index))
            .collect();
        Self::new(grid_size, tiles)
    }

    /// Grid dimension
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of tiles, equal to the number of slots
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board holds no tiles (never true for a valid board)
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in arena order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at an arena index
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tile at an arena index, reporting a bad index as an error
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the tile list
    pub fn checked_tile(&self, index: usize) -> Result<&Tile> {
        self.tiles.get(index).ok_or(PuzzleError::InvalidTileIndex {
            index,
            tile_count: self.tiles.len(),
        })
    }

    /// Arena index of the tile occupying `position`
    pub fn tile_at(&self, position: usize) -> Option<usize> {
        if position >= self.tiles.len() {
            return None;
        }
        let (row, col) = row_col(position, self.grid_size);
        self.slots.get([row, col]).copied()
    }

    /// Tiles in slot order, i.e. sorted by current position
    pub fn slot_order(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.slots.iter().filter_map(|&index| self.tiles.get(index))
    }

    /// Number of tiles resting in their correct slot
    pub fn correct_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_locked()).count()
    }

    /// Whether the slot map and tile positions describe the same bijection
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.tiles.len()];
        for (position, &index) in self.slots.iter().enumerate() {
            let Some(tile) = self.tiles.get(index) else {
                return false;
            };
            if tile.current_pos != position {
                return false;
            }
            match seen.get_mut(index) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        seen.iter().all(|&flag| flag)
    }

    /// Move tiles to new positions and update the slot map
    ///
    /// The moves must jointly permute the slots they touch: every position
    /// vacated by a moved tile is the destination of another moved tile.
    pub(crate) fn relocate(&mut self, moves: &[(usize, usize)]) {
        for &(index, new_position) in moves {
            if let Some(tile) = self.tiles.get_mut(index) {
                tile.current_pos = new_position;
            }
        }
        for &(index, new_position) in moves {
            let (row, col) = row_col(new_position, self.grid_size);
            if let Some(cell) = self.slots.get_mut([row, col]) {
                *cell = index;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .tiles
            .iter()
            .map(|tile| tile.id.to_string().len())
            .max()
            .unwrap_or(1);

        for (position, tile) in self.slot_order().enumerate() {
            let (_, col) = row_col(position, self.grid_size);
            if col > 0 {
                write!(f, " ")?;
            }
            let marker = if tile.is_locked() { '*' } else { ' ' };
            write!(f, "{:>width$}{marker}", tile.id)?;
            if col + 1 == self.grid_size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
