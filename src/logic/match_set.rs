//! Best-of-N set: replay games until one side reaches the win threshold.

use crate::logic::game::resolve_match;
use crate::logic::picks::PickSource;
use crate::models::{Competitor, ElementGraph, MatchOutcome, MatchSet, TournamentError};

/// Play `set` out between `attacker` (competitor A) and `defender` (competitor B).
///
/// Each game draws the attacker's pick, then the defender's, from `picks`. Ties are counted in
/// `set.ties` but never scored. With `tie_limit = None` ties are rerolled indefinitely; with
/// `Some(n)` the set fails once more than `n` ties have occurred.
///
/// Both picks are cleared on return. On failure the set's scores and ties are reset.
///
/// Every scored game adds exactly one point to one side, so the first side to reach the
/// threshold does so while the other is still below it.
pub fn resolve_match_set(
    set: &mut MatchSet,
    attacker: &mut Competitor,
    defender: &mut Competitor,
    graph: &ElementGraph,
    picks: &mut dyn PickSource,
    tie_limit: Option<u32>,
) -> Result<(), TournamentError> {
    if set.is_resolved() {
        return Err(TournamentError::SetAlreadyResolved);
    }
    if attacker.id != set.competitor_a {
        return Err(TournamentError::CompetitorNotInSet(attacker.id));
    }
    if defender.id != set.competitor_b {
        return Err(TournamentError::CompetitorNotInSet(defender.id));
    }

    let played = play_games(set, attacker, defender, graph, picks, tie_limit);
    attacker.clear_pick();
    defender.clear_pick();
    if let Err(e) = played {
        // No partial score survives a failed set.
        set.reset();
        return Err(e);
    }

    let winner = set.finish()?;
    log::info!(
        "{}({}) VS {}({}) | Winner: {}",
        attacker.name,
        set.score_a,
        defender.name,
        set.score_b,
        if winner == attacker.id { &attacker.name } else { &defender.name }
    );
    Ok(())
}

fn play_games(
    set: &mut MatchSet,
    attacker: &mut Competitor,
    defender: &mut Competitor,
    graph: &ElementGraph,
    picks: &mut dyn PickSource,
    tie_limit: Option<u32>,
) -> Result<(), TournamentError> {
    while !set.threshold_reached() {
        let a = picks.next_pick(graph).ok_or(TournamentError::PickSourceExhausted)?;
        let d = picks.next_pick(graph).ok_or(TournamentError::PickSourceExhausted)?;
        graph.element(a)?;
        graph.element(d)?;
        attacker.set_pick(a);
        defender.set_pick(d);

        let outcome = resolve_match(graph, attacker, defender)?;
        log::debug!(
            "{} ({}) vs {} ({}): {:?}",
            attacker.name,
            graph.element(a)?.name,
            defender.name,
            graph.element(d)?.name,
            outcome
        );

        match outcome {
            MatchOutcome::Tie => {
                set.record_tie();
                if let Some(limit) = tie_limit {
                    if set.ties > limit {
                        log::warn!(
                            "{} vs {} exceeded {} tied games",
                            attacker.name,
                            defender.name,
                            limit
                        );
                        return Err(TournamentError::TieLimitReached { limit });
                    }
                }
            }
            MatchOutcome::Winner(id) => set.record_win(id)?,
        }
    }
    Ok(())
}

/// Build a fresh set between two competitors and play it out.
pub fn play_match_set(
    attacker: &mut Competitor,
    defender: &mut Competitor,
    graph: &ElementGraph,
    picks: &mut dyn PickSource,
    win_threshold: u32,
    tie_limit: Option<u32>,
) -> Result<MatchSet, TournamentError> {
    let mut set = MatchSet::new(attacker.id, defender.id, win_threshold)?;
    resolve_match_set(&mut set, attacker, defender, graph, picks, tie_limit)?;
    Ok(set)
}
