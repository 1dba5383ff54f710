//! Group displacement: translating a rigid group while keeping one tile per slot
//!
//! The group moves by a uniform offset. Non-group tiles standing in the
//! group's destination footprint ("victims") are moved into the slots the
//! group abandons ("vacancies"). Slots covered by both the old and new
//! footprint belong to the group throughout and are neither.

use bitvec::bitvec;
use tracing::{debug, error};

use crate::board::layout::{Board, position, row_col};
use crate::io::error::{PuzzleError, Result};

impl Board {
    /// Move `group` so its first tile lands on `target`, returning the new board
    ///
    /// The receiver is never modified: a rejected move is a no-op for the
    /// caller. Victims are paired with vacancies by sorting victims by tile id
    /// and vacancies by position, which makes the result independent of the
    /// order the group indices were supplied in (apart from the anchor).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `group` is empty or contains an invalid tile index
    /// - `target` lies outside the board
    /// - The translation pushes any group tile off the board
    /// - Vacated and displaced slot counts disagree
    pub fn displace_group(&self, group: &[usize], target: usize) -> Result<Self> {
        let &anchor = group.first().ok_or(PuzzleError::EmptyGroup)?;
        let grid_size = self.grid_size();
        if target >= self.len() {
            return Err(PuzzleError::InvalidPosition {
                position: target,
                slots: self.len(),
            });
        }

        let anchor_tile = self.checked_tile(anchor)?;
        let (anchor_row, anchor_col) = row_col(anchor_tile.current_pos, grid_size);
        let (target_row, target_col) = row_col(target, grid_size);
        let offset_row = target_row as isize - anchor_row as isize;
        let offset_col = target_col as isize - anchor_col as isize;

        let mut in_group = bitvec![0; self.len()];
        let mut sources = bitvec![0; self.len()];
        let mut targets = bitvec![0; self.len()];
        let mut group_moves = Vec::with_capacity(group.len());

        for &index in group {
            let tile = self.checked_tile(index)?;
            if in_group.get(index).as_deref() == Some(&true) {
                continue;
            }
            in_group.set(index, true);

            let (row, col) = row_col(tile.current_pos, grid_size);
            let new_row = row as isize + offset_row;
            let new_col = col as isize + offset_col;
            if new_row < 0
                || new_col < 0
                || new_row >= grid_size as isize
                || new_col >= grid_size as isize
            {
                return Err(PuzzleError::OffBoard {
                    row: new_row,
                    col: new_col,
                    grid_size,
                });
            }

            let new_position = position(new_row as usize, new_col as usize, grid_size);
            sources.set(tile.current_pos, true);
            targets.set(new_position, true);
            group_moves.push((index, new_position));
        }

        // Ascending by construction: iter_ones walks positions in order
        let vacancies: Vec<usize> = sources
            .iter_ones()
            .filter(|&pos| targets.get(pos).as_deref() != Some(&true))
            .collect();

        let mut victims: Vec<usize> = targets
            .iter_ones()
            .filter(|&pos| sources.get(pos).as_deref() != Some(&true))
            .filter_map(|pos| self.tile_at(pos))
            .filter(|&index| in_group.get(index).as_deref() == Some(&false))
            .collect();

        if vacancies.len() != victims.len() {
            error!(
                vacancies = vacancies.len(),
                victims = victims.len(),
                "group displacement footprint mismatch"
            );
            return Err(PuzzleError::VacancyMismatch {
                vacancies: vacancies.len(),
                victims: victims.len(),
            });
        }

        victims.sort_by_key(|&index| self.tile(index).map_or(index, |tile| tile.id));

        let mut moves = group_moves;
        moves.extend(victims.into_iter().zip(vacancies));

        let mut displaced = self.clone();
        displaced.relocate(&moves);
        debug!(
            anchor,
            target,
            offset_row,
            offset_col,
            moved = moves.len(),
            "displaced tile group"
        );
        Ok(displaced)
    }
}
