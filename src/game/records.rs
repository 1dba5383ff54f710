//! In-memory record of completed levels and collection progression

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use tracing::info;

use crate::game::level::{Level, stars_for_time};
use crate::io::configuration::{
    ALWAYS_UNLOCKED_COLLECTIONS, COLLECTION_SIZE, COLLECTION_UNLOCK_THRESHOLD,
};

/// Best result achieved on one level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRecord {
    /// Level the record belongs to
    pub level: Level,
    /// Highest star rating earned
    pub stars: u8,
    /// Fastest completion time in seconds
    pub best_time: u64,
    /// Number of times the level was completed
    pub completions: u32,
}

/// Collection a level belongs to
pub const fn collection_of(level: Level) -> u32 {
    level.number().saturating_sub(1) / COLLECTION_SIZE
}

/// Level numbers spanned by a collection
pub const fn collection_levels(index: u32) -> RangeInclusive<u32> {
    let start = index.saturating_mul(COLLECTION_SIZE).saturating_add(1);
    RangeInclusive::new(start, start.saturating_add(COLLECTION_SIZE - 1))
}

/// Per-level completion records
#[derive(Debug, Clone, Default)]
pub struct LevelRecords {
    records: BTreeMap<Level, LevelRecord>,
    unlocked: BTreeSet<u32>,
    puzzles_solved: u32,
    time_played: u64,
}

impl LevelRecords {
    /// Create an empty record book
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completion, keeping the best time and stars seen so far
    ///
    /// Time is added to the play total only for a first completion or an
    /// improved result. Counted saves then check whether the level's
    /// collection now unlocks the next one.
    pub fn save(&mut self, level: Level, seconds: u64) -> LevelRecord {
        let stars = stars_for_time(seconds);
        let record = match self.records.entry(level) {
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                record.completions = record.completions.saturating_add(1);
                if seconds >= record.best_time && stars <= record.stars {
                    return *record;
                }
                record.stars = record.stars.max(stars);
                record.best_time = record.best_time.min(seconds);
                *record
            }
            Entry::Vacant(entry) => {
                self.puzzles_solved = self.puzzles_solved.saturating_add(1);
                *entry.insert(LevelRecord {
                    level,
                    stars,
                    best_time: seconds,
                    completions: 1,
                })
            }
        };

        self.add_play_time(seconds);
        self.unlock_after(level);
        record
    }

    fn unlock_after(&mut self, level: Level) {
        let index = collection_of(level);
        let completed = self.completed_in_range(collection_levels(index));
        if completed >= COLLECTION_UNLOCK_THRESHOLD {
            let next = index.saturating_add(1);
            if next >= ALWAYS_UNLOCKED_COLLECTIONS && self.unlocked.insert(next) {
                info!(collection = next, completed, "collection unlocked");
            }
        }
    }

    /// Add seconds to the total play time
    pub const fn add_play_time(&mut self, seconds: u64) {
        self.time_played = self.time_played.saturating_add(seconds);
    }

    /// Record for a level, if it was ever completed
    pub fn get(&self, level: Level) -> Option<&LevelRecord> {
        self.records.get(&level)
    }

    /// Sum of the best star ratings over every level
    pub fn total_stars(&self) -> u32 {
        self.records.values().map(|record| u32::from(record.stars)).sum()
    }

    /// Number of distinct levels completed
    pub fn completed_levels(&self) -> usize {
        self.records.len()
    }

    /// Distinct levels completed since the book was created
    pub const fn total_puzzles_solved(&self) -> u32 {
        self.puzzles_solved
    }

    /// Seconds of counted play
    pub const fn total_time_played(&self) -> u64 {
        self.time_played
    }

    /// Completed levels whose number lies in `levels`
    pub fn completed_in_range(&self, levels: RangeInclusive<u32>) -> usize {
        self.in_range(levels).count()
    }

    /// Best stars summed over the completed levels in `levels`
    pub fn stars_in_range(&self, levels: RangeInclusive<u32>) -> u32 {
        self.in_range(levels)
            .map(|record| u32::from(record.stars))
            .sum()
    }

    fn in_range(&self, levels: RangeInclusive<u32>) -> impl Iterator<Item = &LevelRecord> {
        self.records
            .values()
            .filter(move |record| levels.contains(&record.level.number()))
    }

    /// Whether a collection can be played
    pub fn is_collection_unlocked(&self, index: u32) -> bool {
        index < ALWAYS_UNLOCKED_COLLECTIONS || self.unlocked.contains(&index)
    }

    /// Playable collections in ascending order
    pub fn unlocked_collections(&self) -> impl Iterator<Item = u32> {
        (0..ALWAYS_UNLOCKED_COLLECTIONS).chain(self.unlocked.iter().copied())
    }

    /// Records in level order
    pub fn iter(&self) -> impl Iterator<Item = &LevelRecord> {
        self.records.values()
    }
}
