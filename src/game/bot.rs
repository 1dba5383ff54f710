//! Greedy solver that plays a session through its public moves
//!
//! Each move takes the first misplaced tile in slot order and swaps it with
//! the tile sitting on its correct slot. The misplaced tile always locks, so a
//! board of `k` tiles needs at most `k - 1` moves.

use tracing::trace;

use crate::game::session::{Feedback, GameSession};
use crate::io::error::{PuzzleError, Result};

/// Outcome of a solved session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    /// Moves made by the solver
    pub moves: u32,
    /// Boards solved
    pub puzzles: usize,
}

/// Play `session` to completion with the greedy strategy
///
/// # Errors
///
/// Returns an error if the session rejects a move, which would mean the
/// board broke its own invariants
pub fn solve<F: Feedback>(session: &mut GameSession<F>) -> Result<SolveReport> {
    let start_moves = session.moves();

    while !session.is_complete() {
        let Some(misplaced) = session.hint() else {
            break;
        };
        let board = session.board();
        let correct_pos = board.checked_tile(misplaced)?.correct_pos;
        let occupant = board.tile_at(correct_pos).ok_or(PuzzleError::InvalidPosition {
            position: correct_pos,
            slots: board.len(),
        })?;
        trace!(misplaced, occupant, "bot swap");
        session.drag_swap(misplaced, occupant)?;
    }

    Ok(SolveReport {
        moves: session.moves() - start_moves,
        puzzles: session.solved_count(),
    })
}
