//! Level layout, dealing and star rating

use rand::Rng;

use crate::board::Board;
use crate::io::configuration::{
    HARD_GRID_SIZE, HARD_LEVEL_INTERVAL, HARD_LEVEL_PUZZLES, ONE_STAR_SECONDS, STANDARD_GRID_SIZE,
    THREE_STAR_SECONDS, TWO_STAR_SECONDS,
};
use crate::io::error::{Result, invalid_parameter};

/// Difficulty class of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    /// One puzzle on the standard grid
    Standard,
    /// Several sub-puzzles on the larger grid, solved in sequence
    Hard,
}

/// A numbered level, starting at one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level {
    number: u32,
}

impl Level {
    /// Create a level
    ///
    /// # Errors
    ///
    /// Returns an error if `number` is zero
    pub fn new(number: u32) -> Result<Self> {
        if number == 0 {
            return Err(invalid_parameter(
                "level",
                &number,
                &"levels are numbered from 1",
            ));
        }
        Ok(Self { number })
    }

    /// Level number
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Difficulty class
    pub const fn kind(self) -> LevelKind {
        if self.number % HARD_LEVEL_INTERVAL == 0 {
            LevelKind::Hard
        } else {
            LevelKind::Standard
        }
    }

    /// Grid dimension of each puzzle on this level
    pub const fn grid_size(self) -> usize {
        match self.kind() {
            LevelKind::Standard => STANDARD_GRID_SIZE,
            LevelKind::Hard => HARD_GRID_SIZE,
        }
    }

    /// Number of puzzles to solve on this level
    pub const fn puzzle_count(self) -> usize {
        match self.kind() {
            LevelKind::Standard => 1,
            LevelKind::Hard => HARD_LEVEL_PUZZLES,
        }
    }

    /// Deal one shuffled board per puzzle, tagged with puzzle indices `0..count`
    ///
    /// # Errors
    ///
    /// Returns an error if a board cannot be built for the level's grid size
    pub fn deal<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.puzzle_count());
        for puzzle in 0..self.puzzle_count() {
            let solved = Board::solved(self.grid_size(), Some(puzzle))?;
            boards.push(solved.shuffled(rng));
        }
        Ok(boards)
    }
}

/// Stars earned for finishing a level in `seconds`
///
/// Under ten seconds earns three, under twenty two, thirty or more one; the
/// remaining band also earns two.
pub const fn stars_for_time(seconds: u64) -> u8 {
    if seconds < THREE_STAR_SECONDS {
        3
    } else if seconds < TWO_STAR_SECONDS {
        2
    } else if seconds >= ONE_STAR_SECONDS {
        1
    } else {
        2
    }
}
