//! Per-code segments and the finalized reaction index.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::organism::{OrganismId, OrganismRecord};

/// The organisms discovered between one identity marker and the next.
///
/// Organisms iterate in registration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Reaction {
    code: String,
    organisms: Vec<OrganismRecord>,
    #[serde(skip)]
    by_id: FxHashMap<OrganismId, usize>,
}

impl Reaction {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            organisms: Vec::new(),
            by_id: FxHashMap::default(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Register an organism, or replace the species name of an existing one.
    /// Returns true when the id was new.
    pub fn register(&mut self, id: OrganismId, species_name: impl Into<String>) -> bool {
        if let Some(&slot) = self.by_id.get(&id) {
            self.organisms[slot].set_species_name(species_name);
            return false;
        }
        self.by_id.insert(id.clone(), self.organisms.len());
        self.organisms.push(OrganismRecord::new(id, species_name));
        true
    }

    pub fn organism(&self, id: &OrganismId) -> Option<&OrganismRecord> {
        self.by_id.get(id).map(|&slot| &self.organisms[slot])
    }

    pub fn organism_mut(&mut self, id: &OrganismId) -> Option<&mut OrganismRecord> {
        match self.by_id.get(id) {
            Some(&slot) => Some(&mut self.organisms[slot]),
            None => None,
        }
    }

    pub fn organisms(&self) -> impl Iterator<Item = &OrganismRecord> {
        self.organisms.iter()
    }

    pub fn organism_count(&self) -> usize {
        self.organisms.len()
    }

    pub fn measurement_count(&self) -> usize {
        self.organisms.iter().map(|o| o.measurements().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }
}

/// Sealed segments keyed by classification code.
///
/// Populated during the single parse pass and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReactionIndex {
    reactions: FxHashMap<String, Reaction>,
}

impl ReactionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sealed segment. Returns the segment it replaced, if any.
    pub fn seal(&mut self, reaction: Reaction) -> Option<Reaction> {
        self.reactions.insert(reaction.code.clone(), reaction)
    }

    pub fn get(&self, code: &str) -> Option<&Reaction> {
        self.reactions.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.reactions.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.reactions.keys().map(String::as_str)
    }
}
