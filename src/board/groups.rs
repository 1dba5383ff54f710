//! Rigid tile groups: maximal clusters positioned exactly as in the solution
//!
//! Two board-adjacent tiles are rigid neighbors when they are also adjacent in
//! the solved layout and the offset between their current positions equals
//! the offset between their correct positions. A group is the connected
//! component of that relation, restricted to one sub-puzzle.

use std::collections::VecDeque;

use bitvec::bitvec;
use tracing::trace;

use crate::board::layout::{Board, row_col};
use crate::board::tile::Tile;
use crate::io::error::Result;

/// Whether two tiles are horizontally or vertically adjacent when solved
pub const fn adjacent_in_solution(a: &Tile, b: &Tile, grid_size: usize) -> bool {
    let (row_a, col_a) = row_col(a.correct_pos, grid_size);
    let (row_b, col_b) = row_col(b.correct_pos, grid_size);
    row_a.abs_diff(row_b) + col_a.abs_diff(col_b) == 1
}

/// Whether the current offset between two tiles matches their solved offset
pub const fn same_relative_position(a: &Tile, b: &Tile) -> bool {
    let current = b.current_pos as isize - a.current_pos as isize;
    let correct = b.correct_pos as isize - a.correct_pos as isize;
    current == correct
}

impl Board {
    /// Arena indices of the tiles directly above, below, left and right
    ///
    /// Row and column bounds are checked before stepping so lookups never
    /// wrap across a row boundary.
    pub fn board_neighbors(&self, index: usize) -> Vec<usize> {
        let Some(tile) = self.tile(index) else {
            return Vec::new();
        };
        let grid_size = self.grid_size();
        let pos = tile.current_pos;
        let (row, col) = row_col(pos, grid_size);

        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.extend(self.tile_at(pos - grid_size));
        }
        if col + 1 < grid_size {
            neighbors.extend(self.tile_at(pos + 1));
        }
        if row + 1 < grid_size {
            neighbors.extend(self.tile_at(pos + grid_size));
        }
        if col > 0 {
            neighbors.extend(self.tile_at(pos - 1));
        }
        neighbors
    }

    /// Maximal rigid group containing `anchor`, in breadth-first order
    ///
    /// The anchor is always the first element. Only tiles sharing the
    /// anchor's puzzle index are considered.
    ///
    /// # Errors
    ///
    /// Returns an error if `anchor` is not a valid tile index
    pub fn find_group(&self, anchor: usize) -> Result<Vec<usize>> {
        self.checked_tile(anchor)?;
        let group = self.collect_group(anchor);
        trace!(anchor, size = group.len(), "found tile group");
        Ok(group)
    }

    /// Partition every tile into disjoint rigid groups, singletons included
    pub fn all_groups(&self) -> Vec<Vec<usize>> {
        let mut assigned = bitvec![0; self.len()];
        let mut groups = Vec::new();

        for index in 0..self.len() {
            if assigned.get(index).as_deref() == Some(&true) {
                continue;
            }
            let group = self.collect_group(index);
            for &member in &group {
                assigned.set(member, true);
            }
            groups.push(group);
        }

        groups
    }

    fn collect_group(&self, anchor: usize) -> Vec<usize> {
        let Some(anchor_tile) = self.tile(anchor) else {
            return Vec::new();
        };
        let grid_size = self.grid_size();

        let mut visited = bitvec![0; self.len()];
        let mut queue = VecDeque::from([anchor]);
        let mut group = Vec::new();

        while let Some(current) = queue.pop_front() {
            if visited.get(current).as_deref() != Some(&false) {
                continue;
            }
            visited.set(current, true);
            group.push(current);

            let Some(current_tile) = self.tile(current) else {
                continue;
            };

            for neighbor in self.board_neighbors(current) {
                if visited.get(neighbor).as_deref() == Some(&true) {
                    continue;
                }
                let Some(neighbor_tile) = self.tile(neighbor) else {
                    continue;
                };
                if neighbor_tile.same_puzzle(anchor_tile)
                    && adjacent_in_solution(current_tile, neighbor_tile, grid_size)
                    && same_relative_position(current_tile, neighbor_tile)
                {
                    queue.push_back(neighbor);
                }
            }
        }

        group
    }
}
