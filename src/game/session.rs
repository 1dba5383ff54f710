//! Game session state machine: selection, lock rule, moves and completion
//!
//! A session owns the boards dealt for one level. Tiles resting in their
//! correct slot are locked and ignore input. Multi-puzzle levels are played
//! one board at a time; solving a board advances to the next pending one and
//! the level completes once every board is solved.

use std::collections::VecDeque;
use std::mem;

use rand::Rng;
use tracing::{debug, info};

use crate::board::Board;
use crate::game::level::Level;
use crate::io::error::{PuzzleError, Result, invalid_parameter};

/// Hooks for presentation effects (sounds, animations) driven by the session
///
/// Implementations are constructed by the caller and injected into the
/// session. Every hook defaults to doing nothing.
pub trait Feedback {
    /// A move increased the number of correctly placed tiles
    fn tile_placed(&mut self, _correct: usize) {}
    /// The board of sub-puzzle `puzzle` was solved
    fn puzzle_solved(&mut self, _puzzle: usize) {}
    /// Every board of the level was solved
    fn level_won(&mut self, _moves: u32) {}
}

/// Feedback that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {}

/// Feedback that reports events through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggedFeedback;

impl Feedback for LoggedFeedback {
    fn tile_placed(&mut self, correct: usize) {
        debug!(correct, "tile placed");
    }

    fn puzzle_solved(&mut self, puzzle: usize) {
        debug!(puzzle, "puzzle solved");
    }

    fn level_won(&mut self, moves: u32) {
        debug!(moves, "level complete");
    }
}

/// Result of a click or drag on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Input had no effect (locked tile, or a drag onto itself)
    Ignored,
    /// The tile became the current selection
    Selected(usize),
    /// The selected tile was clicked again and released
    Deselected,
    /// The two tiles exchanged positions
    Swapped(usize, usize),
}

/// One dealt board with its sub-puzzle index
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleSet {
    index: usize,
    board: Board,
}

impl PuzzleSet {
    /// Sub-puzzle index within the level
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Board of this sub-puzzle
    pub const fn board(&self) -> &Board {
        &self.board
    }
}

/// Interactive state of one level
#[derive(Debug)]
pub struct GameSession<F = Silent> {
    level: Level,
    active: PuzzleSet,
    pending: VecDeque<PuzzleSet>,
    solved: Vec<PuzzleSet>,
    selected: Option<usize>,
    hinted: Option<usize>,
    moves: u32,
    complete: bool,
    feedback: F,
}

impl<F: Feedback> GameSession<F> {
    /// Deal the level's boards and start a session
    ///
    /// # Errors
    ///
    /// Returns an error if the level's boards cannot be dealt
    pub fn new<R: Rng + ?Sized>(level: Level, rng: &mut R, feedback: F) -> Result<Self> {
        Self::from_boards(level, level.deal(rng)?, feedback)
    }

    /// Start a session over boards prepared by the caller, played in order
    ///
    /// Boards that are already solved count as completed immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if `boards` is empty
    pub fn from_boards(level: Level, boards: Vec<Board>, feedback: F) -> Result<Self> {
        let mut pending: VecDeque<PuzzleSet> = boards
            .into_iter()
            .enumerate()
            .map(|(index, board)| PuzzleSet { index, board })
            .collect();
        let active = pending.pop_front().ok_or_else(|| {
            invalid_parameter("boards", &0, &"a session needs at least one board")
        })?;

        let mut session = Self {
            level,
            active,
            pending,
            solved: Vec::new(),
            selected: None,
            hinted: None,
            moves: 0,
            complete: false,
            feedback,
        };
        session.check_completion();
        Ok(session)
    }

    /// Level being played
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Board currently in play
    pub const fn board(&self) -> &Board {
        &self.active.board
    }

    /// Sub-puzzle index of the board currently in play
    pub const fn current_puzzle(&self) -> usize {
        self.active.index
    }

    /// Number of boards dealt for the level
    pub fn puzzle_count(&self) -> usize {
        self.solved.len() + 1 + self.pending.len()
    }

    /// Number of boards already solved
    pub fn solved_count(&self) -> usize {
        self.solved.len() + usize::from(self.complete)
    }

    /// Currently selected tile index
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Id of the tile highlighted by the last hint
    pub const fn hinted_tile(&self) -> Option<usize> {
        self.hinted
    }

    /// Moves made since the session started
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether every board of the level is solved
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Injected feedback service
    pub const fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Percentage of correctly placed tiles across every board of the level
    pub fn progress(&self) -> f64 {
        let (placed, total) = self.all_sets().fold((0, 0), |(placed, total), set| {
            (placed + set.board.correct_count(), total + set.board.len())
        });
        if total == 0 {
            0.0
        } else {
            placed as f64 / total as f64 * 100.0
        }
    }

    /// Click a tile: select it, release it, or swap it with the selection
    ///
    /// Clicking a locked tile is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is complete, `index` is invalid, or the
    /// swap is refused
    pub fn click(&mut self, index: usize) -> Result<ClickOutcome> {
        self.ensure_active()?;
        if self.board().checked_tile(index)?.is_locked() {
            return Ok(ClickOutcome::Ignored);
        }
        self.hinted = None;

        match self.selected {
            None => {
                self.selected = Some(index);
                Ok(ClickOutcome::Selected(index))
            }
            Some(selected) if selected == index => {
                self.selected = None;
                Ok(ClickOutcome::Deselected)
            }
            Some(selected) => {
                self.swap_tiles(selected, index)?;
                self.selected = None;
                Ok(ClickOutcome::Swapped(selected, index))
            }
        }
    }

    /// Drag one tile onto another and swap them
    ///
    /// # Errors
    ///
    /// Returns an error if the game is complete, an index is invalid, either
    /// tile is locked, or the tiles belong to different puzzles
    pub fn drag_swap(&mut self, from: usize, to: usize) -> Result<ClickOutcome> {
        self.ensure_active()?;
        if from == to {
            return Ok(ClickOutcome::Ignored);
        }
        self.swap_tiles(from, to)?;
        self.selected = None;
        self.hinted = None;
        Ok(ClickOutcome::Swapped(from, to))
    }

    /// Drag the rigid group containing `anchor` so the anchor lands on `target`
    ///
    /// Returns the moved group. A move that would shift a locked tile, or a
    /// displacement the board rejects, leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is complete, `anchor` or `target` is
    /// invalid, the group would leave the board, or a locked tile would move
    pub fn drag_group(&mut self, anchor: usize, target: usize) -> Result<Vec<usize>> {
        self.ensure_active()?;
        let board = self.board();
        let group = board.find_group(anchor)?;
        let displaced = board.displace_group(&group, target)?;

        let disturbed = board
            .tiles()
            .iter()
            .zip(displaced.tiles())
            .position(|(before, after)| {
                before.is_locked() && before.current_pos != after.current_pos
            });
        if let Some(index) = disturbed {
            return Err(PuzzleError::TileLocked { index });
        }

        if displaced.tiles() == board.tiles() {
            return Ok(group);
        }

        let correct_before = board.correct_count();
        self.active.board = displaced;
        self.moves += 1;
        self.selected = None;
        self.hinted = None;
        self.after_move(correct_before);
        Ok(group)
    }

    /// Highlight the first misplaced tile in slot order and select it
    pub fn hint(&mut self) -> Option<usize> {
        if self.complete {
            return None;
        }
        let board = &self.active.board;
        let index = (0..board.len())
            .filter_map(|position| board.tile_at(position))
            .find(|&index| board.tile(index).is_some_and(|tile| !tile.is_locked()))?;
        self.selected = Some(index);
        self.hinted = board.tile(index).map(|tile| tile.id);
        Some(index)
    }

    /// Drop the hint highlight and its selection
    pub const fn clear_hint(&mut self) {
        if self.hinted.is_some() {
            self.hinted = None;
            self.selected = None;
        }
    }

    /// Shuffle the board in play again, locked tiles included
    ///
    /// # Errors
    ///
    /// Returns an error if the game is complete
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.ensure_active()?;
        self.active.board = self.active.board.shuffled(rng);
        self.selected = None;
        self.hinted = None;
        self.check_completion();
        Ok(())
    }

    /// Restart the level: every board is reset, reshuffled and played again
    ///
    /// # Errors
    ///
    /// Returns an error if a board's solved arrangement is not a valid board
    pub fn play_again<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let mut sets: Vec<&PuzzleSet> = self.all_sets().collect();
        sets.sort_by_key(|set| set.index);

        let mut reset = VecDeque::with_capacity(sets.len());
        for set in sets {
            reset.push_back(PuzzleSet {
                index: set.index,
                board: set.board.solved_arrangement()?.shuffled(rng),
            });
        }
        let Some(first) = reset.pop_front() else {
            return Ok(());
        };

        self.active = first;
        self.pending = reset;
        self.solved.clear();
        self.selected = None;
        self.hinted = None;
        self.moves = 0;
        self.complete = false;
        info!(level = self.level.number(), "level restarted");
        self.check_completion();
        Ok(())
    }

    fn all_sets(&self) -> impl Iterator<Item = &PuzzleSet> {
        self.solved
            .iter()
            .chain(std::iter::once(&self.active))
            .chain(self.pending.iter())
    }

    const fn ensure_active(&self) -> Result<()> {
        if self.complete {
            Err(PuzzleError::GameComplete)
        } else {
            Ok(())
        }
    }

    fn swap_tiles(&mut self, a: usize, b: usize) -> Result<()> {
        let board = self.board();
        let tile_a = *board.checked_tile(a)?;
        let tile_b = *board.checked_tile(b)?;
        if tile_a.is_locked() {
            return Err(PuzzleError::TileLocked { index: a });
        }
        if tile_b.is_locked() {
            return Err(PuzzleError::TileLocked { index: b });
        }
        if !tile_a.same_puzzle(&tile_b) {
            return Err(PuzzleError::CrossPuzzle {
                first: a,
                second: b,
            });
        }

        let correct_before = board.correct_count();
        self.active.board.swap(a, b)?;
        self.moves += 1;
        self.after_move(correct_before);
        Ok(())
    }

    fn after_move(&mut self, correct_before: usize) {
        let correct = self.active.board.correct_count();
        if correct > correct_before {
            self.feedback.tile_placed(correct);
        }
        self.check_completion();
    }

    fn check_completion(&mut self) {
        while !self.complete && self.active.board.is_solved() {
            self.feedback.puzzle_solved(self.active.index);
            if let Some(next) = self.pending.pop_front() {
                let finished = mem::replace(&mut self.active, next);
                info!(
                    puzzle = finished.index,
                    next = self.active.index,
                    "advancing to next puzzle"
                );
                self.solved.push(finished);
                self.selected = None;
                self.hinted = None;
            } else {
                self.complete = true;
                self.feedback.level_won(self.moves);
            }
        }
    }
}
