//! Game constants and runtime configuration defaults

// Level layout
/// Grid dimension of a standard level
pub const STANDARD_GRID_SIZE: usize = 3;
/// Grid dimension of each sub-puzzle on a hard level
pub const HARD_GRID_SIZE: usize = 4;
/// Every level number divisible by this is a hard level
pub const HARD_LEVEL_INTERVAL: u32 = 5;
/// Number of sub-puzzles dealt on a hard level
pub const HARD_LEVEL_PUZZLES: usize = 3;

// Keeps tile ids of different sub-puzzles disjoint
/// Id offset applied per sub-puzzle index
pub const PUZZLE_ID_STRIDE: usize = 1000;

// Star rating thresholds in seconds
/// Completion under this time earns three stars
pub const THREE_STAR_SECONDS: u64 = 10;
/// Completion under this time earns two stars
pub const TWO_STAR_SECONDS: u64 = 20;
/// Completion at or beyond this time earns a single star
pub const ONE_STAR_SECONDS: u64 = 30;

// Level collections
/// Levels per collection
pub const COLLECTION_SIZE: u32 = 6;
/// Completed levels of a collection that unlock the next one
pub const COLLECTION_UNLOCK_THRESHOLD: usize = 4;
/// Collections below this index never need unlocking
pub const ALWAYS_UNLOCKED_COLLECTIONS: u32 = 3;

// Default values for configurable parameters
/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;
/// Default number of simulated games
pub const DEFAULT_GAMES: usize = 100;
/// Default level for simulations
pub const DEFAULT_LEVEL: u32 = 1;

// Simulation clock used for star estimates
/// Seconds charged per move when rating simulated games
pub const SECONDS_PER_MOVE: u64 = 1;

// Output settings
/// Suffix added to scrambled image filenames
pub const OUTPUT_SUFFIX: &str = "_scrambled";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
