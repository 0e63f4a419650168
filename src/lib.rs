//! Element bracket: single-elimination tournament resolved by rock-paper-scissors style games.

pub mod logic;
pub mod models;
pub mod report;

pub use logic::{
    play_match_set, resolve_bracket, resolve_match, resolve_match_set, resolve_next_round,
    PickSource, RandomPicks, ScriptedPicks,
};
pub use models::{
    Bracket, BracketId, BracketReport, Competitor, CompetitorId, Element, ElementGraph, ElementId,
    ErrorKind, MatchOutcome, MatchSet, MatchSetResult, RoundLabel, RoundReport, SetReport,
    TournamentConfig, TournamentError, DEFAULT_WIN_THRESHOLD,
};
