//! Elements and the directed weakness graph between them.

use crate::models::bracket::TournamentError;
use serde::{Deserialize, Serialize};

/// Handle of an element inside the graph that created it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// A named node of the weakness graph.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    /// Elements that beat this one.
    pub weak_to: Vec<ElementId>,
}

impl Element {
    fn new(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            weak_to: Vec::new(),
        }
    }
}

/// Fixed set of elements and who beats whom.
///
/// Built once before any competitor picks. A [`Bracket`](crate::Bracket) takes the graph by
/// value and only hands out shared references afterwards, so it cannot change mid-tournament.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ElementGraph {
    elements: Vec<Element>,
}

impl ElementGraph {
    /// Empty graph; add elements and weaknesses before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rock is beaten by Paper, Paper by Scissors, Scissors by Rock.
    pub fn canonical() -> Self {
        let mut graph = Self::new();
        let rock = graph.push("Rock");
        let paper = graph.push("Paper");
        let scissors = graph.push("Scissors");
        graph.elements[rock.0].weak_to.push(paper);
        graph.elements[paper.0].weak_to.push(scissors);
        graph.elements[scissors.0].weak_to.push(rock);
        graph
    }

    fn push(&mut self, name: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(id, name));
        id
    }

    /// Register a new element. Names must be unique (case-insensitive) and non-empty.
    pub fn add_element(&mut self, name: impl Into<String>) -> Result<ElementId, TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyElementName);
        }
        if self.find(name_trimmed).is_some() {
            return Err(TournamentError::DuplicateElementName(name_trimmed.to_string()));
        }
        Ok(self.push(name_trimmed))
    }

    /// Record that `beaten_by` beats `element`. Adding the same edge twice is a no-op.
    pub fn add_weakness(
        &mut self,
        element: ElementId,
        beaten_by: ElementId,
    ) -> Result<(), TournamentError> {
        self.element(beaten_by)?;
        if element == beaten_by {
            return Err(TournamentError::SelfWeakness(element));
        }
        let e = self
            .elements
            .get_mut(element.0)
            .ok_or(TournamentError::UnknownElement(element))?;
        if !e.weak_to.contains(&beaten_by) {
            e.weak_to.push(beaten_by);
        }
        Ok(())
    }

    /// Look up an element; foreign handles are rejected rather than treated as "not weak".
    pub fn element(&self, id: ElementId) -> Result<&Element, TournamentError> {
        self.elements
            .get(id.0)
            .ok_or(TournamentError::UnknownElement(id))
    }

    /// Find an element by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True iff `defender` beats `attacker`, i.e. `defender` is listed in `attacker.weak_to`.
    pub fn weak_against(
        &self,
        attacker: ElementId,
        defender: ElementId,
    ) -> Result<bool, TournamentError> {
        self.element(defender)?;
        Ok(self.element(attacker)?.weak_to.contains(&defender))
    }

    /// True iff `a` beats `b`.
    pub fn beats(&self, a: ElementId, b: ElementId) -> Result<bool, TournamentError> {
        self.weak_against(b, a)
    }

    /// Every pair of distinct elements has exactly one winner.
    ///
    /// Match resolution relies on this: when neither element of a pair beats the other, the
    /// attacker is awarded the game.
    pub fn is_total(&self) -> bool {
        self.elements.iter().all(|a| {
            self.elements.iter().filter(|b| b.id != a.id).all(|b| {
                let a_loses = a.weak_to.contains(&b.id);
                let b_loses = b.weak_to.contains(&a.id);
                a_loses != b_loses
            })
        })
    }
}
