//! Tournament engine: single games, best-of-N sets, and bracket progression.

mod bracket;
mod game;
mod match_set;
mod picks;

pub use bracket::{resolve_bracket, resolve_next_round};
pub use game::resolve_match;
pub use match_set::{play_match_set, resolve_match_set};
pub use picks::{PickSource, RandomPicks, ScriptedPicks};
