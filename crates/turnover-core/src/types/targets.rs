//! The user-supplied set of classification codes.

use std::io::BufRead;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::errors::SourceError;

/// Insertion-ordered set of target codes.
///
/// Iteration follows first-seen order so pagination is reproducible.
#[derive(Debug, Clone, Default)]
pub struct TargetCodes {
    ordered: Vec<String>,
    members: FxHashSet<String>,
}

impl TargetCodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load codes from a line-delimited file.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let file = std::fs::File::open(path).map_err(|e| SourceError::from_io(path, e))?;
        Self::from_reader(std::io::BufReader::new(file)).map_err(|e| SourceError::from_io(path, e))
    }

    /// One code per line, trimmed; blank lines skipped; duplicates collapse.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut codes = Self::new();
        for line in reader.lines() {
            codes.insert(line?.trim());
        }
        Ok(codes)
    }

    /// Returns true when the code was not already present.
    pub fn insert(&mut self, code: &str) -> bool {
        let code = code.trim();
        if code.is_empty() || self.members.contains(code) {
            return false;
        }
        self.members.insert(code.to_string());
        self.ordered.push(code.to_string());
        true
    }

    pub fn contains(&self, code: &str) -> bool {
        self.members.contains(code)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TargetCodes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut codes = Self::new();
        for code in iter {
            codes.insert(code.as_ref());
        }
        codes
    }
}
