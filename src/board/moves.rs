//! Swap, win check and shuffle primitives

use rand::Rng;

use crate::board::layout::Board;
use crate::board::tile::Tile;
use crate::io::error::Result;

/// Whether every tile rests in its correct slot
pub fn check_win(tiles: &[Tile]) -> bool {
    tiles.iter().all(Tile::is_locked)
}

/// Fisher–Yates shuffle driven by the supplied random source
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

impl Board {
    /// Exchange the current positions of two tiles
    ///
    /// Usage contract: in play neither tile may be locked. The primitive does
    /// not enforce this; [`GameSession`](crate::game::session::GameSession)
    /// does. Swapping a tile with itself leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is not a valid tile index
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let pos_a = self.checked_tile(a)?.current_pos;
        let pos_b = self.checked_tile(b)?.current_pos;
        self.relocate(&[(a, pos_b), (b, pos_a)]);
        Ok(())
    }

    /// Whether the puzzle is solved
    pub fn is_solved(&self) -> bool {
        check_win(self.tiles())
    }

    /// New board with every tile moved to its correct slot
    ///
    /// # Errors
    ///
    /// Returns an error if the correct positions do not form a bijection
    pub fn solved_arrangement(&self) -> Result<Self> {
        let tiles = self
            .tiles()
            .iter()
            .map(|tile| Tile {
                current_pos: tile.correct_pos,
                ..*tile
            })
            .collect();
        Self::new(self.grid_size(), tiles)
    }

    /// New board with the current positions randomly permuted among the tiles
    ///
    /// Tile identities keep their arena indices; only positions move. The
    /// solved arrangement is a possible outcome.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut positions: Vec<usize> =
            self.tiles().iter().map(|tile| tile.current_pos).collect();
        fisher_yates(&mut positions, rng);

        let moves: Vec<(usize, usize)> = positions.into_iter().enumerate().collect();
        let mut shuffled = self.clone();
        shuffled.relocate(&moves);
        shuffled
    }
}
