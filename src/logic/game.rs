//! Single game: two picks in, a winner or a tie out.

use crate::models::{Competitor, ElementGraph, MatchOutcome, TournamentError};

/// Resolve one game between the attacker's and the defender's current picks.
///
/// 1. Same element: tie.
/// 2. Attacker's element is weak against the defender's: defender wins.
/// 3. Otherwise the attacker wins.
///
/// Step 3 is only a real "attacker beats defender" when the graph is total; for pairs where
/// neither element beats the other the attacker still takes the game.
pub fn resolve_match(
    graph: &ElementGraph,
    attacker: &Competitor,
    defender: &Competitor,
) -> Result<MatchOutcome, TournamentError> {
    let a = attacker.pick()?;
    let d = defender.pick()?;
    if a == d {
        graph.element(a)?;
        return Ok(MatchOutcome::Tie);
    }
    if graph.weak_against(a, d)? {
        return Ok(MatchOutcome::Winner(defender.id));
    }
    Ok(MatchOutcome::Winner(attacker.id))
}
