//! pH, temperature and wild-type/mutant flags scoped to one organism.

use once_cell::sync::Lazy;
use regex::Regex;
use turnover_core::types::{NumericRange, OrganismId, ScopedFields};

use super::scope::ClauseScope;

static PH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bpH\s*(\d{1,2}\.?\d*)(?:-(\d{1,2}\.?\d*))?").unwrap());

static TEMPERATURE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,3}(?:\.\d+)?)°C").unwrap());

static WILD_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)wild|native").unwrap());

static MUTANT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)mutant|recombinant").unwrap());

/// Extract every organism-scoped field of `clause` for `id`.
pub fn extract_scoped(clause: &str, id: &OrganismId) -> ScopedFields {
    let scope = ClauseScope::new(clause, id);
    let is_mutant = is_mutant(&scope);
    ScopedFields {
        ph: extract_ph(&scope),
        temperature: extract_temperature(&scope),
        is_wild_type: !is_mutant && mentions_wild_type(&scope),
        is_mutant,
    }
}

/// pH range from the organism's windows, falling back to the preamble when
/// the clause references the organism at all.
pub fn extract_ph(scope: &ClauseScope<'_>) -> Option<NumericRange> {
    first_in_scope(scope, ph_in)
}

/// First `<n>°C` temperature, scoped like [`extract_ph`].
pub fn extract_temperature(scope: &ClauseScope<'_>) -> Option<String> {
    first_in_scope(scope, |text| {
        TEMPERATURE_REGEX
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// A mutant keyword after one of the organism's references.
pub fn is_mutant(scope: &ClauseScope<'_>) -> bool {
    any_window(scope, &MUTANT_REGEX)
}

/// Wild-type requires a wild/native mention and no mutant keyword, both after
/// one of the organism's references.
pub fn is_wild_type(scope: &ClauseScope<'_>) -> bool {
    mentions_wild_type(scope) && !is_mutant(scope)
}

fn mentions_wild_type(scope: &ClauseScope<'_>) -> bool {
    any_window(scope, &WILD_TYPE_REGEX)
}

fn any_window(scope: &ClauseScope<'_>, keyword: &Regex) -> bool {
    scope.windows().iter().any(|window| keyword.is_match(window))
}

fn ph_in(text: &str) -> Option<NumericRange> {
    let caps = PH_REGEX.captures(text)?;
    NumericRange::from_tokens(&caps[1], caps.get(2).map(|m| m.as_str()))
}

fn first_in_scope<T>(scope: &ClauseScope<'_>, find: impl Fn(&str) -> Option<T>) -> Option<T> {
    if !scope.is_referenced() {
        return None;
    }
    scope
        .windows()
        .iter()
        .find_map(|&window| find(window))
        .or_else(|| find(scope.preamble()))
}
