//! Organism identity and its measurements.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::measurement::Measurement;

/// Opaque organism identifier, unique within one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganismId(String);

impl OrganismId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganismId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrganismId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One organism and the measurements attributed to it, in clause order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismRecord {
    organism_id: OrganismId,
    species_name: String,
    measurements: Vec<Measurement>,
}

impl OrganismRecord {
    pub fn new(organism_id: OrganismId, species_name: impl Into<String>) -> Self {
        Self {
            organism_id,
            species_name: species_name.into(),
            measurements: Vec::new(),
        }
    }

    pub fn organism_id(&self) -> &OrganismId {
        &self.organism_id
    }

    pub fn species_name(&self) -> &str {
        &self.species_name
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Replace the species name; accumulated measurements are kept.
    pub fn set_species_name(&mut self, species_name: impl Into<String>) {
        self.species_name = species_name.into();
    }

    /// Append-only; earlier measurements are never edited.
    pub fn push_measurement(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }
}
