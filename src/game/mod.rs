//! Game layer built on the board engine
//!
//! Levels deal boards, sessions apply player input under the lock rule,
//! records keep best results, and the bot plays sessions for simulations.

/// Greedy solver used for simulations
pub mod bot;
/// Level layout, dealing and star rating
pub mod level;
/// Per-level completion records
pub mod records;
/// Interactive session state machine
pub mod session;

pub use level::Level;
pub use session::GameSession;
