//! Single-game outcome, best-of-N match sets, and round labels.

use crate::models::bracket::TournamentError;
use crate::models::competitor::CompetitorId;
use serde::{Deserialize, Serialize};

/// Outcome of one pick-vs-pick game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Tie,
    Winner(CompetitorId),
}

impl MatchOutcome {
    pub fn is_tie(&self) -> bool {
        matches!(self, MatchOutcome::Tie)
    }

    pub fn winner(&self) -> Option<CompetitorId> {
        match self {
            MatchOutcome::Tie => None,
            MatchOutcome::Winner(id) => Some(*id),
        }
    }
}

/// Phase of the bracket, named after how many competitors enter it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundLabel {
    Final,
    SemiFinals,
    QuarterFinals,
    RoundOf(usize),
}

impl RoundLabel {
    pub fn for_entrants(entrants: usize) -> Self {
        match entrants {
            2 => RoundLabel::Final,
            4 => RoundLabel::SemiFinals,
            8 => RoundLabel::QuarterFinals,
            n => RoundLabel::RoundOf(n),
        }
    }
}

impl std::fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundLabel::Final => write!(f, "FINAL"),
            RoundLabel::SemiFinals => write!(f, "SEMI FINAL"),
            RoundLabel::QuarterFinals => write!(f, "QUARTER FINAL"),
            RoundLabel::RoundOf(n) => write!(f, "ROUND OF {}", n),
        }
    }
}

/// Repeated games between two fixed competitors until one reaches `win_threshold`.
///
/// Competitor A attacks, B defends. Ties are replayed and never scored, so the set always ends
/// with the winner exactly at the threshold and the loser strictly below it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSet {
    pub competitor_a: CompetitorId,
    pub competitor_b: CompetitorId,
    pub score_a: u32,
    pub score_b: u32,
    pub win_threshold: u32,
    /// Tied games that were discarded.
    pub ties: u32,
    /// None until resolved.
    pub winner: Option<CompetitorId>,
}

impl MatchSet {
    pub fn new(
        competitor_a: CompetitorId,
        competitor_b: CompetitorId,
        win_threshold: u32,
    ) -> Result<Self, TournamentError> {
        if win_threshold == 0 {
            return Err(TournamentError::InvalidWinThreshold(win_threshold));
        }
        Ok(Self {
            competitor_a,
            competitor_b,
            score_a: 0,
            score_b: 0,
            win_threshold,
            ties: 0,
            winner: None,
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether either side has reached the threshold.
    pub fn threshold_reached(&self) -> bool {
        self.score_a >= self.win_threshold || self.score_b >= self.win_threshold
    }

    /// Non-tied games.
    pub fn decided_games(&self) -> u32 {
        self.score_a + self.score_b
    }

    pub fn games_played(&self) -> u32 {
        self.decided_games() + self.ties
    }

    /// Back to 0-0 with no ties, for an unresolved set whose play failed.
    pub fn reset(&mut self) {
        self.score_a = 0;
        self.score_b = 0;
        self.ties = 0;
    }

    pub fn winner(&self) -> Result<CompetitorId, TournamentError> {
        self.winner.ok_or(TournamentError::SetNotResolved)
    }

    /// The competitor that did not win.
    pub fn loser(&self) -> Result<CompetitorId, TournamentError> {
        let w = self.winner()?;
        Ok(if w == self.competitor_a {
            self.competitor_b
        } else {
            self.competitor_a
        })
    }

    /// Record one non-tied game for `winner`.
    pub fn record_win(&mut self, winner: CompetitorId) -> Result<(), TournamentError> {
        if winner == self.competitor_a {
            self.score_a += 1;
        } else if winner == self.competitor_b {
            self.score_b += 1;
        } else {
            return Err(TournamentError::CompetitorNotInSet(winner));
        }
        Ok(())
    }

    pub fn record_tie(&mut self) {
        self.ties += 1;
    }

    /// Fix the winner once the threshold has been reached: the higher score wins.
    pub fn finish(&mut self) -> Result<CompetitorId, TournamentError> {
        if !self.threshold_reached() {
            return Err(TournamentError::SetNotResolved);
        }
        let w = if self.score_a > self.score_b {
            self.competitor_a
        } else {
            self.competitor_b
        };
        self.winner = Some(w);
        Ok(w)
    }

    /// Read-only view for the reporting layer.
    pub fn result(&self) -> Result<MatchSetResult, TournamentError> {
        Ok(MatchSetResult {
            competitor_a: self.competitor_a,
            score_a: self.score_a,
            competitor_b: self.competitor_b,
            score_b: self.score_b,
            winner: self.winner()?,
        })
    }
}

/// Final state of one resolved match set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSetResult {
    pub competitor_a: CompetitorId,
    pub score_a: u32,
    pub competitor_b: CompetitorId,
    pub score_b: u32,
    pub winner: CompetitorId,
}
