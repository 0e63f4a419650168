//! Competitor data structure.

use crate::models::bracket::TournamentError;
use crate::models::element::ElementId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a competitor (used in match sets and lookups).
pub type CompetitorId = Uuid;

/// A tournament participant.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    /// Pick for the game currently being resolved. Meaningless outside a match.
    #[serde(skip)]
    current_pick: Option<ElementId>,
}

impl Competitor {
    /// Create a new competitor with the given name and no pick.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            current_pick: None,
        }
    }

    /// Overwrite the current pick. The element must belong to the active graph; callers check.
    pub fn set_pick(&mut self, element: ElementId) {
        self.current_pick = Some(element);
    }

    /// The current pick, or `PickNotSet` if none was made yet.
    pub fn pick(&self) -> Result<ElementId, TournamentError> {
        self.current_pick.ok_or(TournamentError::PickNotSet(self.id))
    }

    pub fn clear_pick(&mut self) {
        self.current_pick = None;
    }
}
