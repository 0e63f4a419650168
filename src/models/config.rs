//! Tournament configuration (win threshold, tie cap, RNG seed).

use crate::models::bracket::TournamentError;
use serde::{Deserialize, Serialize};

/// Wins needed to take a set when nothing else is configured (best of three).
pub const DEFAULT_WIN_THRESHOLD: u32 = 2;

/// Knobs for resolving a bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Non-tied games a competitor must win to take a set.
    pub win_threshold: u32,
    /// Maximum tied games per set before giving up. `None` means unbounded.
    pub tie_limit: Option<u32>,
    /// Seed for element selection. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            tie_limit: None,
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Read `WIN_THRESHOLD`, `TIE_LIMIT` and `SEED` from the environment.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Result<Self, TournamentError> {
        let defaults = Self::default();
        let config = Self {
            win_threshold: env_parse("WIN_THRESHOLD").unwrap_or(defaults.win_threshold),
            tie_limit: env_parse("TIE_LIMIT").or(defaults.tie_limit),
            seed: env_parse("SEED").or(defaults.seed),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.win_threshold == 0 {
            return Err(TournamentError::InvalidWinThreshold(self.win_threshold));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}
