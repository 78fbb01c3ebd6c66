//! One extracted kinetic observation.

use serde::{Deserialize, Serialize};

use super::number::{Number, NumericRange};

/// Fields scoped to a single organism id within a sub-clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopedFields {
    pub ph: Option<NumericRange>,
    /// Temperature in °C, kept as the numeric text found in the clause.
    pub temperature: Option<String>,
    pub is_wild_type: bool,
    pub is_mutant: bool,
}

/// Immutable once constructed.
///
/// The turnover number and substrate are shared by every organism a record
/// references; the [`ScopedFields`] are re-extracted per organism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    turnover: Option<NumericRange>,
    substrate: Option<String>,
    scoped: ScopedFields,
    source_clause: String,
}

impl Measurement {
    pub fn new(
        turnover: Option<NumericRange>,
        substrate: Option<String>,
        scoped: ScopedFields,
        source_clause: impl Into<String>,
    ) -> Self {
        Self {
            turnover,
            substrate,
            scoped,
            source_clause: source_clause.into(),
        }
    }

    pub fn turnover(&self) -> Option<&NumericRange> {
        self.turnover.as_ref()
    }

    pub fn min_value(&self) -> Option<Number> {
        self.turnover.map(|r| r.min())
    }

    pub fn max_value(&self) -> Option<Number> {
        self.turnover.map(|r| r.max())
    }

    pub fn mean_value(&self) -> Option<f64> {
        self.turnover.map(|r| r.mean())
    }

    pub fn substrate_name(&self) -> Option<&str> {
        self.substrate.as_deref()
    }

    pub fn ph(&self) -> Option<&NumericRange> {
        self.scoped.ph.as_ref()
    }

    pub fn ph_min(&self) -> Option<Number> {
        self.scoped.ph.map(|r| r.min())
    }

    pub fn ph_max(&self) -> Option<Number> {
        self.scoped.ph.map(|r| r.max())
    }

    pub fn ph_mean(&self) -> Option<f64> {
        self.scoped.ph.map(|r| r.mean())
    }

    pub fn temperature(&self) -> Option<&str> {
        self.scoped.temperature.as_deref()
    }

    pub fn is_wild_type(&self) -> bool {
        self.scoped.is_wild_type
    }

    pub fn is_mutant(&self) -> bool {
        self.scoped.is_mutant
    }

    pub fn source_clause(&self) -> &str {
        &self.source_clause
    }
}
