//! Record-level fields of a turnover-number record.

use once_cell::sync::Lazy;
use regex::{Match, Regex};
use smallvec::SmallVec;
use turnover_core::types::{NumericRange, OrganismId};

/// Leading `#ids#` group and the optional `min[-max]` value after it.
static HEAD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(\d+(?:,\d+)*)#\s*(?:(\d+\.?\d*)(?:-(\d+\.?\d*))?)?").unwrap()
});

static BRACE_GROUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

/// Brace groups starting with this qualifier are auxiliary entries, not substrates.
const AUXILIARY_QUALIFIER: &str = "more";

/// Sub-clause separator in the trailing text.
pub const CLAUSE_SEPARATOR: char = ';';

/// The fields of a turnover-number record shared by every organism it references.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnoverRecord {
    pub organism_ids: SmallVec<[OrganismId; 4]>,
    pub turnover: Option<NumericRange>,
    pub substrate: Option<String>,
    /// Trimmed sub-clauses of the trailing text; never empty.
    pub clauses: Vec<String>,
}

/// Parse a turnover-number record body.
/// Returns `None` when the record does not start with an organism reference.
pub fn parse_turnover(text: &str) -> Option<TurnoverRecord> {
    let text = text.trim_start();
    let head = HEAD_REGEX.captures(text)?;

    let organism_ids = head[1].split(',').map(OrganismId::from).collect();
    let turnover = head
        .get(2)
        .and_then(|min| NumericRange::from_tokens(min.as_str(), head.get(3).map(|m| m.as_str())));

    let substrate = substrate_group(text);
    // Clauses follow the substrate group, else the first group, else the head.
    let trailing_start = substrate
        .map(|(group, _)| group.end())
        .or_else(|| BRACE_GROUP_REGEX.find(text).map(|group| group.end()))
        .or_else(|| head.get(0).map(|m| m.end()))
        .unwrap_or(0);

    Some(TurnoverRecord {
        organism_ids,
        turnover,
        substrate: substrate.map(|(_, content)| content.to_string()),
        clauses: split_clauses(&text[trailing_start..]),
    })
}

/// First brace group whose content does not start with the auxiliary qualifier.
pub fn extract_substrate(text: &str) -> Option<String> {
    substrate_group(text).map(|(_, content)| content.to_string())
}

/// The substrate brace group and its trimmed content.
fn substrate_group(text: &str) -> Option<(Match<'_>, &str)> {
    BRACE_GROUP_REGEX.captures_iter(text).find_map(|caps| {
        let group = caps.get(0)?;
        let content = caps.get(1)?.as_str().trim();
        let is_substrate = !content.is_empty() && !content.starts_with(AUXILIARY_QUALIFIER);
        is_substrate.then_some((group, content))
    })
}

fn split_clauses(trailing: &str) -> Vec<String> {
    trailing
        .split(CLAUSE_SEPARATOR)
        .map(|clause| clause.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnover_core::types::Number;

    #[test]
    fn test_range_and_substrate() {
        let record = parse_turnover("#1# 2.5-4.0 {ethanol} pH 6.5-7.5 #1# wild-type 30°C").unwrap();
        assert_eq!(record.organism_ids.as_slice(), &[OrganismId::from("1")]);
        let turnover = record.turnover.unwrap();
        assert_eq!(turnover.min(), Number::Real(2.5));
        assert_eq!(turnover.max(), Number::Real(4.0));
        assert_eq!(turnover.mean(), 3.25);
        assert_eq!(record.substrate.as_deref(), Some("ethanol"));
        assert_eq!(record.clauses, vec!["pH 6.5-7.5 #1# wild-type 30°C"]);
    }

    #[test]
    fn test_single_value_and_multiple_ids() {
        let record =
            parse_turnover("#1,4,7# 12 {NAD+}  (#1# pH 7.0 <2>; #4,7# pH 8.0, mutant <3>) <2,3>")
                .unwrap();
        let ids: Vec<&str> = record.organism_ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4", "7"]);
        let turnover = record.turnover.unwrap();
        assert!(turnover.is_single());
        assert_eq!(turnover.min(), Number::Int(12));
        assert_eq!(record.clauses.len(), 2);
        assert_eq!(record.clauses[0], "(#1# pH 7.0 <2>");
        assert_eq!(record.clauses[1], "#4,7# pH 8.0, mutant <3>) <2,3>");
    }

    #[test]
    fn test_more_groups_are_skipped() {
        assert_eq!(extract_substrate("#1# 5 {more} text {NADH} <1>").as_deref(), Some("NADH"));
        assert_eq!(extract_substrate("#1# 5 {more = ?} <1>"), None);
        assert_eq!(extract_substrate("#1# 5 (#1# no braces) <1>"), None);
    }

    #[test]
    fn test_clauses_start_after_substrate_group() {
        let record = parse_turnover("#1# 12 {more} {NAD+}  (#1# pH 7.0 <1>) <1>").unwrap();
        assert_eq!(record.substrate.as_deref(), Some("NAD+"));
        assert_eq!(record.clauses, vec!["(#1# pH 7.0 <1>) <1>"]);
    }

    #[test]
    fn test_missing_value_is_not_an_error() {
        let record = parse_turnover("#3# -999 {more}  (#3# additional information <5>) <5>").unwrap();
        assert!(record.turnover.is_none());
        assert!(record.substrate.is_none());
        assert_eq!(record.clauses, vec!["(#3# additional information <5>) <5>"]);
    }

    #[test]
    fn test_without_brace_group_trailing_follows_value() {
        let record = parse_turnover("#2# 40 (#2# pH 7.5, 25°C) <1>").unwrap();
        assert!(record.substrate.is_none());
        assert_eq!(record.clauses, vec!["(#2# pH 7.5, 25°C) <1>"]);
    }

    #[test]
    fn test_requires_organism_reference() {
        assert!(parse_turnover("2.5 {ethanol}").is_none());
        assert!(parse_turnover("").is_none());
    }
}
