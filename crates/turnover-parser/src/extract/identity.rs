//! Organism identity from protein records.

use once_cell::sync::Lazy;
use regex::Regex;
use turnover_core::types::OrganismId;

/// `#<id># <species>` with the species cut before any `(` or `<` annotation.
static IDENTITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(\d+)#\s*([^(<]+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganismIdentity {
    pub organism_id: OrganismId,
    pub species_name: String,
}

/// Parse the organism id and species name out of a protein record body.
/// Returns `None` when the text does not follow the identity pattern.
pub fn parse_identity(text: &str) -> Option<OrganismIdentity> {
    let caps = IDENTITY_REGEX.captures(text.trim_start())?;
    let species_name = caps[2].trim();
    if species_name.is_empty() {
        return None;
    }
    Some(OrganismIdentity {
        organism_id: OrganismId::new(&caps[1]),
        species_name: species_name.to_string(),
    })
}
