//! Sources of element picks: uniform random for real runs, scripted for tests and replays.

use crate::models::{ElementGraph, ElementId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Hands out one element per call. Match sets draw the attacker's pick, then the defender's.
pub trait PickSource {
    /// `None` when the source has nothing left (or the graph is empty).
    fn next_pick(&mut self, graph: &ElementGraph) -> Option<ElementId>;
}

/// Uniform choice over every element in the graph.
#[derive(Debug, Clone)]
pub struct RandomPicks<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicks<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicks<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> PickSource for RandomPicks<R> {
    fn next_pick(&mut self, graph: &ElementGraph) -> Option<ElementId> {
        graph.elements().choose(&mut self.rng).map(|e| e.id)
    }
}

/// Fixed sequence of picks, consumed front to back.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicks {
    queue: VecDeque<ElementId>,
}

impl ScriptedPicks {
    pub fn new(picks: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            queue: picks.into_iter().collect(),
        }
    }

    /// Flatten (attacker, defender) pairs, one pair per game.
    pub fn from_games(games: impl IntoIterator<Item = (ElementId, ElementId)>) -> Self {
        Self::new(games.into_iter().flat_map(|(a, b)| [a, b]))
    }

    pub fn push_game(&mut self, attacker: ElementId, defender: ElementId) {
        self.queue.push_back(attacker);
        self.queue.push_back(defender);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl PickSource for ScriptedPicks {
    fn next_pick(&mut self, _graph: &ElementGraph) -> Option<ElementId> {
        self.queue.pop_front()
    }
}
