//! Bracket, TournamentError, and the read-only results view.

use crate::models::competitor::{Competitor, CompetitorId};
use crate::models::config::TournamentConfig;
use crate::models::element::{ElementGraph, ElementId};
use crate::models::game::{MatchSet, MatchSetResult, RoundLabel};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Class of a [`TournamentError`]. All of them are caller contract violations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Something was read before it was computed.
    PreconditionViolation,
    /// A handle that does not belong to the graph, set or bracket it was used with.
    InvalidArgument,
    /// The bracket shape is wrong, or rounds were accessed out of order.
    StructuralError,
}

/// Errors that can occur while building or resolving a tournament.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Competitor has no current pick.
    PickNotSet(CompetitorId),
    /// Match set has no winner yet.
    SetNotResolved,
    /// Match set was already played out.
    SetAlreadyResolved,
    /// The final has not been resolved.
    ChampionNotDecided,
    /// The pick source had nothing left to hand out.
    PickSourceExhausted,
    /// A set saw more tied games than the configured cap.
    TieLimitReached { limit: u32 },
    /// Element handle is not part of the graph.
    UnknownElement(ElementId),
    /// An element cannot be weak to itself.
    SelfWeakness(ElementId),
    /// An element with this name already exists (names are unique, case-insensitive).
    DuplicateElementName(String),
    EmptyElementName,
    /// The same competitor fills more than one bracket slot.
    DuplicateCompetitor(CompetitorId),
    /// Picks are drawn from the graph, so it needs at least one element.
    EmptyElementGraph,
    /// Competitor not found in the bracket.
    UnknownCompetitor(CompetitorId),
    /// Competitor is not one of the two operands of the set.
    CompetitorNotInSet(CompetitorId),
    /// Sets must be won by at least one game.
    InvalidWinThreshold(u32),
    /// Competitor count must be a power of two, at least 2.
    InvalidCompetitorCount(usize),
    /// Round exists but has not been resolved yet.
    RoundNotResolved(usize),
    /// Round index past the last round.
    RoundOutOfRange { round: usize, rounds: usize },
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            PickNotSet(_)
            | SetNotResolved
            | SetAlreadyResolved
            | ChampionNotDecided
            | PickSourceExhausted
            | TieLimitReached { .. } => ErrorKind::PreconditionViolation,
            UnknownElement(_)
            | SelfWeakness(_)
            | DuplicateElementName(_)
            | EmptyElementName
            | DuplicateCompetitor(_)
            | EmptyElementGraph
            | UnknownCompetitor(_)
            | CompetitorNotInSet(_)
            | InvalidWinThreshold(_) => ErrorKind::InvalidArgument,
            InvalidCompetitorCount(_) | RoundNotResolved(_) | RoundOutOfRange { .. } => {
                ErrorKind::StructuralError
            }
        }
    }
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::PickNotSet(id) => write!(f, "Competitor {} has no pick", id),
            TournamentError::SetNotResolved => write!(f, "Match set has not been resolved"),
            TournamentError::SetAlreadyResolved => write!(f, "Match set was already resolved"),
            TournamentError::ChampionNotDecided => write!(f, "The final has not been played"),
            TournamentError::PickSourceExhausted => write!(f, "No more picks available"),
            TournamentError::TieLimitReached { limit } => {
                write!(f, "Match set tied more than {} times", limit)
            }
            TournamentError::UnknownElement(id) => write!(f, "Element {} is not in the graph", id.0),
            TournamentError::SelfWeakness(id) => {
                write!(f, "Element {} cannot be weak to itself", id.0)
            }
            TournamentError::DuplicateElementName(name) => {
                write!(f, "An element named {} already exists", name)
            }
            TournamentError::EmptyElementName => write!(f, "Element name must not be empty"),
            TournamentError::DuplicateCompetitor(id) => {
                write!(f, "Competitor {} appears more than once", id)
            }
            TournamentError::EmptyElementGraph => write!(f, "Element graph has no elements"),
            TournamentError::UnknownCompetitor(id) => write!(f, "Competitor {} not found", id),
            TournamentError::CompetitorNotInSet(id) => {
                write!(f, "Competitor {} is not part of this match set", id)
            }
            TournamentError::InvalidWinThreshold(n) => {
                write!(f, "Win threshold must be at least 1 (got {})", n)
            }
            TournamentError::InvalidCompetitorCount(n) => {
                write!(f, "Need a power of two competitors, at least 2 (got {})", n)
            }
            TournamentError::RoundNotResolved(r) => write!(f, "Round {} has not been resolved", r),
            TournamentError::RoundOutOfRange { round, rounds } => {
                write!(f, "Round {} does not exist (bracket has {} rounds)", round, rounds)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for one bracket run.
pub type BracketId = Uuid;

/// Single-elimination tree of match sets.
///
/// Round 0 pairs slots `[0,1]`, `[2,3]`, ...; set `i` of round `r + 1` is played between the
/// winners of sets `2i` and `2i + 1` of round `r`. Rounds are appended to `rounds` as they are
/// resolved, so `rounds.len()` is the number of finished rounds.
#[derive(Clone, Debug)]
pub struct Bracket {
    pub id: BracketId,
    pub config: TournamentConfig,
    pub(crate) graph: ElementGraph,
    /// Competitor table in seeding order.
    pub(crate) competitors: Vec<Competitor>,
    pub(crate) rounds: Vec<Vec<MatchSet>>,
}

impl Bracket {
    /// Create a bracket from a seeded competitor list. Nothing is played yet.
    pub fn new(
        graph: ElementGraph,
        competitors: Vec<Competitor>,
        config: TournamentConfig,
    ) -> Result<Self, TournamentError> {
        let n = competitors.len();
        if n < 2 || !n.is_power_of_two() {
            return Err(TournamentError::InvalidCompetitorCount(n));
        }
        let mut seen = HashSet::with_capacity(n);
        if let Some(dup) = competitors.iter().find(|c| !seen.insert(c.id)) {
            return Err(TournamentError::DuplicateCompetitor(dup.id));
        }
        config.validate()?;
        if graph.is_empty() {
            return Err(TournamentError::EmptyElementGraph);
        }
        if !graph.is_total() {
            log::warn!("Element graph is not total; undecided pairs go to the attacker");
        }
        Ok(Self {
            id: Uuid::new_v4(),
            config,
            graph,
            competitors,
            rounds: Vec::new(),
        })
    }

    /// Create a bracket with fresh competitors named in seeding order.
    pub fn with_names<I, S>(
        graph: ElementGraph,
        names: I,
        config: TournamentConfig,
    ) -> Result<Self, TournamentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let competitors = names.into_iter().map(Competitor::new).collect();
        Self::new(graph, competitors, config)
    }

    pub fn graph(&self) -> &ElementGraph {
        &self.graph
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn competitor(&self, id: CompetitorId) -> Result<&Competitor, TournamentError> {
        self.competitors
            .iter()
            .find(|c| c.id == id)
            .ok_or(TournamentError::UnknownCompetitor(id))
    }

    /// The graph plus two distinct competitors, mutably, for resolving a set between them.
    pub(crate) fn match_up(
        &mut self,
        a: CompetitorId,
        b: CompetitorId,
    ) -> Result<(&ElementGraph, &mut Competitor, &mut Competitor), TournamentError> {
        let ia = self.position(a)?;
        let ib = self.position(b)?;
        if ia == ib {
            return Err(TournamentError::CompetitorNotInSet(b));
        }
        let graph = &self.graph;
        if ia < ib {
            let (left, right) = self.competitors.split_at_mut(ib);
            Ok((graph, &mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.competitors.split_at_mut(ia);
            Ok((graph, &mut right[0], &mut left[ib]))
        }
    }

    fn position(&self, id: CompetitorId) -> Result<usize, TournamentError> {
        self.competitors
            .iter()
            .position(|c| c.id == id)
            .ok_or(TournamentError::UnknownCompetitor(id))
    }

    /// log2 of the field size: 3 for eight competitors.
    pub fn round_count(&self) -> usize {
        self.competitors.len().trailing_zeros() as usize
    }

    pub fn resolved_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_complete(&self) -> bool {
        self.rounds.len() == self.round_count()
    }

    pub fn round_label(&self, round: usize) -> Result<RoundLabel, TournamentError> {
        self.check_round(round)?;
        Ok(RoundLabel::for_entrants(self.competitors.len() >> round))
    }

    fn check_round(&self, round: usize) -> Result<(), TournamentError> {
        let rounds = self.round_count();
        if round >= rounds {
            return Err(TournamentError::RoundOutOfRange { round, rounds });
        }
        Ok(())
    }

    /// Resolved sets of one round, in bracket order.
    pub fn round(&self, round: usize) -> Result<&[MatchSet], TournamentError> {
        self.check_round(round)?;
        self.rounds
            .get(round)
            .map(Vec::as_slice)
            .ok_or(TournamentError::RoundNotResolved(round))
    }

    /// One entry per set of a resolved round.
    pub fn get_round_results(&self, round: usize) -> Result<Vec<MatchSetResult>, TournamentError> {
        self.round(round)?.iter().map(MatchSet::result).collect()
    }

    /// Winner of the final.
    pub fn get_champion(&self) -> Result<&Competitor, TournamentError> {
        if !self.is_complete() {
            return Err(TournamentError::ChampionNotDecided);
        }
        let final_set = self
            .rounds
            .last()
            .and_then(|r| r.first())
            .ok_or(TournamentError::ChampionNotDecided)?;
        self.competitor(final_set.winner()?)
    }

    /// Competitors entering the next unresolved round, in pairing order.
    pub(crate) fn next_round_entrants(&self) -> Result<Vec<CompetitorId>, TournamentError> {
        match self.rounds.last() {
            None => Ok(self.competitors.iter().map(|c| c.id).collect()),
            Some(prev) => prev.iter().map(MatchSet::winner).collect(),
        }
    }

    /// Snapshot of every resolved round, with names, for display or JSON output.
    pub fn report(&self) -> Result<BracketReport, TournamentError> {
        let mut rounds = Vec::with_capacity(self.rounds.len());
        for (index, sets) in self.rounds.iter().enumerate() {
            let mut entries = Vec::with_capacity(sets.len());
            for set in sets {
                entries.push(SetReport {
                    competitor_a: self.competitor(set.competitor_a)?.name.clone(),
                    score_a: set.score_a,
                    competitor_b: self.competitor(set.competitor_b)?.name.clone(),
                    score_b: set.score_b,
                    winner: self.competitor(set.winner()?)?.name.clone(),
                    ties: set.ties,
                });
            }
            rounds.push(RoundReport {
                round: index,
                label: self.round_label(index)?,
                sets: entries,
            });
        }
        let champion = match self.get_champion() {
            Ok(c) => Some(c.name.clone()),
            Err(TournamentError::ChampionNotDecided) => None,
            Err(e) => return Err(e),
        };
        Ok(BracketReport {
            id: self.id,
            rounds,
            champion,
        })
    }
}

/// One set as shown to the reporting layer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetReport {
    pub competitor_a: String,
    pub score_a: u32,
    pub competitor_b: String,
    pub score_b: u32,
    pub winner: String,
    pub ties: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: usize,
    pub label: RoundLabel,
    pub sets: Vec<SetReport>,
}

/// Full results tree of a bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketReport {
    pub id: BracketId,
    pub rounds: Vec<RoundReport>,
    /// None until the final is resolved.
    pub champion: Option<String>,
}
