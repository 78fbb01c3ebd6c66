//! Organism-scoped views of a sub-clause.
//!
//! A sub-clause can multiplex several organisms, each `#ids#` reference
//! governing the text up to the next reference:
//!
//! ```text
//! pH 7.5 #1# 25°C, wild-type #2,3# 37°C, mutant
//! ^^^^^^^    ^^^^^^^^^^^^^^^^     ^^^^^^^^^^^^^^
//! preamble   window of 1          window of 2 and 3
//! ```
//!
//! A pH or temperature in the preamble is shared by every organism the clause
//! references. Mutant and wild-type keywords only count inside a window. A
//! clause that references no organism has nothing scoped to any of them.

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;
use turnover_core::types::OrganismId;

static ORGANISM_REF_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\d+(?:,\d+)*)#").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseScope<'a> {
    preamble: &'a str,
    windows: SmallVec<[&'a str; 2]>,
}

impl<'a> ClauseScope<'a> {
    /// Build the scope of `id` within `clause`.
    pub fn new(clause: &'a str, id: &OrganismId) -> Self {
        let refs: SmallVec<[regex::Captures<'a>; 4]> =
            ORGANISM_REF_REGEX.captures_iter(clause).collect();

        let preamble = match refs.first().and_then(|caps| caps.get(0)) {
            Some(first) => &clause[..first.start()],
            None => clause,
        };

        let mut windows = SmallVec::new();
        for (i, caps) in refs.iter().enumerate() {
            let (Some(whole), Some(list)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if !lists_id(list.as_str(), id) {
                continue;
            }
            let end = refs
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(clause.len(), |next| next.start());
            windows.push(&clause[whole.end()..end]);
        }

        Self { preamble, windows }
    }

    /// Text before the first organism reference.
    pub fn preamble(&self) -> &'a str {
        self.preamble
    }

    /// Text governed by references that list this organism, in clause order.
    pub fn windows(&self) -> &[&'a str] {
        &self.windows
    }

    /// True when the clause explicitly references this organism.
    pub fn is_referenced(&self) -> bool {
        !self.windows.is_empty()
    }
}

fn lists_id(list: &str, id: &OrganismId) -> bool {
    list.split(',').any(|candidate| candidate == id.as_str())
}
