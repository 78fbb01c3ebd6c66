//! Row flattening.

use serde::Serialize;
use turnover_core::types::{Measurement, NumericRange, OrganismRecord, Reaction};

/// Column headers, in output order.
pub const COLUMNS: [&str; 10] = [
    "EC number",
    "Species",
    "Number",
    "Tn [mmol subs/(mmol enz * s)]",
    "Substrate",
    "pH",
    "Temperature [°C]",
    "Wild-type",
    "Mutant",
    "Description",
];

const FLAG_SET: &str = "Yes";

/// A single output cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn optional_text(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::text)
    }

    /// Single values become numbers, true ranges `min-max` text.
    fn range(range: Option<&NumericRange>) -> Self {
        match range {
            Some(r) if r.is_single() => Self::Number(r.min().as_f64()),
            Some(r) => Self::Text(r.to_string()),
            None => Self::Empty,
        }
    }

    fn temperature(value: Option<&str>) -> Self {
        match value {
            Some(text) => text
                .parse::<f64>()
                .map_or_else(|_| Self::text(text), Self::Number),
            None => Self::Empty,
        }
    }

    fn flag(set: bool) -> Self {
        if set {
            Self::text(FLAG_SET)
        } else {
            Self::Empty
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// One (code, organism, measurement) row; cells follow [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: [Cell; COLUMNS.len()],
}

impl TableRow {
    pub fn new(code: &str, organism: &OrganismRecord, measurement: &Measurement) -> Self {
        Self {
            cells: [
                Cell::text(code),
                Cell::text(organism.species_name()),
                Cell::text(organism.organism_id().as_str()),
                Cell::range(measurement.turnover()),
                Cell::optional_text(measurement.substrate_name()),
                Cell::range(measurement.ph()),
                Cell::temperature(measurement.temperature()),
                Cell::flag(measurement.is_wild_type()),
                Cell::flag(measurement.is_mutant()),
                Cell::text(measurement.source_clause()),
            ],
        }
    }

    /// Cell under the named header.
    pub fn get(&self, column: &str) -> Option<&Cell> {
        COLUMNS
            .iter()
            .position(|&c| c == column)
            .map(|i| &self.cells[i])
    }
}

/// Rows of one segment: organisms in registration order, then measurements.
pub fn reaction_rows(reaction: &Reaction) -> impl Iterator<Item = TableRow> + '_ {
    reaction.organisms().flat_map(move |organism| {
        organism
            .measurements()
            .iter()
            .map(move |m| TableRow::new(reaction.code(), organism, m))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnover_core::types::{Number, ScopedFields};

    #[test]
    fn test_range_cells() {
        let single = NumericRange::single(Number::Int(12));
        assert_eq!(Cell::range(Some(&single)), Cell::Number(12.0));
        let range = NumericRange::new(Number::Real(2.5), Number::Real(4.0));
        assert_eq!(Cell::range(Some(&range)), Cell::text("2.5-4.0"));
        let mixed = NumericRange::new(Number::Int(2), Number::Real(2.0));
        assert_eq!(Cell::range(Some(&mixed)), Cell::Number(2.0));
        assert!(Cell::range(None).is_empty());
    }

    #[test]
    fn test_tiny_range_bounds_use_exponent_text() {
        let range = NumericRange::from_tokens("0.00001", Some("0.0002")).unwrap();
        assert_eq!(Cell::range(Some(&range)), Cell::text("1e-05-0.0002"));
    }

    #[test]
    fn test_row_layout() {
        let mut reaction = Reaction::new("1.1.1.1");
        reaction.register("1".into(), "Escherichia coli");
        let scoped = ScopedFields {
            temperature: Some("30".into()),
            is_mutant: true,
            ..ScopedFields::default()
        };
        reaction
            .organism_mut(&"1".into())
            .unwrap()
            .push_measurement(Measurement::new(None, None, scoped, "#1# mutant 30°C"));

        let rows: Vec<TableRow> = reaction_rows(&reaction).collect();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.get("EC number").and_then(Cell::as_text), Some("1.1.1.1"));
        assert_eq!(row.get("Number").and_then(Cell::as_text), Some("1"));
        assert!(row.get("Tn [mmol subs/(mmol enz * s)]").unwrap().is_empty());
        assert_eq!(row.get("Temperature [°C]").and_then(Cell::as_number), Some(30.0));
        assert!(row.get("Wild-type").unwrap().is_empty());
        assert_eq!(row.get("Mutant").and_then(Cell::as_text), Some("Yes"));
        assert_eq!(row.get("Description").and_then(Cell::as_text), Some("#1# mutant 30°C"));
        assert!(row.get("Unknown").is_none());
    }
}
