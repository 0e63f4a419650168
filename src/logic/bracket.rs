//! Bracket progression: resolve round after round until a champion remains.

use crate::logic::match_set::resolve_match_set;
use crate::logic::picks::PickSource;
use crate::models::{Bracket, MatchSet, TournamentError};

/// Resolve the next unresolved round and return its index.
///
/// Entrants are the initial slots for round 0, otherwise the winners of the previous round in
/// bracket order; consecutive pairs meet, the first of each pair attacking. The round is only
/// recorded once every set in it has a winner.
pub fn resolve_next_round(
    bracket: &mut Bracket,
    picks: &mut dyn PickSource,
) -> Result<usize, TournamentError> {
    let round = bracket.resolved_rounds();
    // Fails with RoundOutOfRange once the final is done.
    let label = bracket.round_label(round)?;
    let entrants = bracket.next_round_entrants()?;
    let win_threshold = bracket.config.win_threshold;
    let tie_limit = bracket.config.tie_limit;

    log::info!("{}: {} competitors", label, entrants.len());

    let mut sets = Vec::with_capacity(entrants.len() / 2);
    for pair in entrants.chunks_exact(2) {
        let mut set = MatchSet::new(pair[0], pair[1], win_threshold)?;
        let (graph, attacker, defender) = bracket.match_up(pair[0], pair[1])?;
        resolve_match_set(&mut set, attacker, defender, graph, picks, tie_limit)?;
        sets.push(set);
    }

    bracket.rounds.push(sets);
    Ok(round)
}

/// Resolve every remaining round. Returns the number of rounds played by this call.
pub fn resolve_bracket(
    bracket: &mut Bracket,
    picks: &mut dyn PickSource,
) -> Result<usize, TournamentError> {
    let mut played = 0;
    while !bracket.is_complete() {
        resolve_next_round(bracket, picks)?;
        played += 1;
    }
    let champion = bracket.get_champion()?;
    log::info!("Champion: {}", champion.name);
    Ok(played)
}
