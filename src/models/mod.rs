//! Data structures for the tournament: elements, competitors, match sets, bracket.

mod bracket;
mod competitor;
mod config;
mod element;
mod game;

pub use bracket::{
    Bracket, BracketId, BracketReport, ErrorKind, RoundReport, SetReport, TournamentError,
};
pub use competitor::{Competitor, CompetitorId};
pub use config::{TournamentConfig, DEFAULT_WIN_THRESHOLD};
pub use element::{Element, ElementGraph, ElementId};
pub use game::{MatchOutcome, MatchSet, MatchSetResult, RoundLabel};
