//! Database segmenter: a two-state machine over the logical record stream.
//!
//! Identity markers open segments. Inside a segment whose code is a target,
//! the most recent protein or turnover-number record is buffered and
//! dispatched when the next record arrives, when the segment ends, or at end
//! of input. Segments for other codes are dropped as soon as they close.

use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use turnover_core::config::ParserConfig;
use turnover_core::errors::{ParseError, PipelineError, SourceError};
use turnover_core::types::{Measurement, Reaction, ReactionIndex, TargetCodes};

use crate::extract;
use crate::record::{FieldKind, LogicalRecord, Reassembler};

/// Counters collected over one parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub lines_read: usize,
    pub orphan_lines: usize,
    pub records: usize,
    pub segments_seen: usize,
    pub segments_sealed: usize,
    pub segments_discarded: usize,
    pub protein_records: usize,
    pub turnover_records: usize,
    pub measurements: usize,
}

/// Result of a complete parse.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub index: ReactionIndex,
    pub stats: ParseStats,
}

enum SegmentState {
    NoActiveSegment,
    InSegment { reaction: Reaction, targeted: bool },
}

pub struct Segmenter<'t> {
    targets: &'t TargetCodes,
    state: SegmentState,
    pending: Option<LogicalRecord>,
    index: ReactionIndex,
    stats: ParseStats,
}

impl<'t> Segmenter<'t> {
    pub fn new(targets: &'t TargetCodes) -> Self {
        Self {
            targets,
            state: SegmentState::NoActiveSegment,
            pending: None,
            index: ReactionIndex::new(),
            stats: ParseStats::default(),
        }
    }

    /// Code of the open segment, if any.
    pub fn current_code(&self) -> Option<&str> {
        match &self.state {
            SegmentState::InSegment { reaction, .. } => Some(reaction.code()),
            SegmentState::NoActiveSegment => None,
        }
    }

    /// The buffered record awaiting dispatch.
    pub fn pending(&self) -> Option<&LogicalRecord> {
        self.pending.as_ref()
    }

    pub fn feed(&mut self, record: LogicalRecord) -> Result<(), ParseError> {
        self.stats.records += 1;
        match record.kind {
            FieldKind::Identity => self.begin_segment(&record),
            kind if kind.is_of_interest() && self.is_targeted() => {
                self.flush()?;
                self.pending = Some(record);
                Ok(())
            }
            _ => self.flush(),
        }
    }

    /// Dispatch the last buffered record and seal the final segment.
    pub fn finish(mut self) -> Result<ParseOutcome, ParseError> {
        self.flush()?;
        self.seal();
        Ok(ParseOutcome {
            index: self.index,
            stats: self.stats,
        })
    }

    fn is_targeted(&self) -> bool {
        matches!(self.state, SegmentState::InSegment { targeted: true, .. })
    }

    fn begin_segment(&mut self, marker: &LogicalRecord) -> Result<(), ParseError> {
        self.flush()?;
        self.seal();

        let code = marker
            .text
            .split_whitespace()
            .next()
            .ok_or(ParseError::MissingCode { line: marker.line })?;
        let targeted = self.targets.contains(code);
        self.stats.segments_seen += 1;
        self.state = SegmentState::InSegment {
            reaction: Reaction::new(code),
            targeted,
        };
        Ok(())
    }

    fn seal(&mut self) {
        match std::mem::replace(&mut self.state, SegmentState::NoActiveSegment) {
            SegmentState::InSegment {
                reaction,
                targeted: true,
            } => {
                debug!(
                    code = reaction.code(),
                    organisms = reaction.organism_count(),
                    measurements = reaction.measurement_count(),
                    "segment sealed"
                );
                let code = reaction.code().to_string();
                if self.index.seal(reaction).is_some() {
                    warn!(code = %code, "repeated identity marker replaced an earlier segment");
                }
                self.stats.segments_sealed += 1;
            }
            SegmentState::InSegment {
                reaction,
                targeted: false,
            } => {
                debug!(code = reaction.code(), "segment discarded");
                self.stats.segments_discarded += 1;
            }
            SegmentState::NoActiveSegment => {}
        }
    }

    fn flush(&mut self) -> Result<(), ParseError> {
        let Some(record) = self.pending.take() else {
            return Ok(());
        };
        let SegmentState::InSegment { reaction, .. } = &mut self.state else {
            return Ok(());
        };
        match record.kind {
            FieldKind::Protein => dispatch_protein(reaction, &record, &mut self.stats),
            FieldKind::TurnoverNumber => dispatch_turnover(reaction, &record, &mut self.stats),
            _ => Ok(()),
        }
    }
}

/// Register (or re-name) the organism a protein record declares.
fn dispatch_protein(
    reaction: &mut Reaction,
    record: &LogicalRecord,
    stats: &mut ParseStats,
) -> Result<(), ParseError> {
    let identity =
        extract::parse_identity(&record.text).ok_or_else(|| ParseError::UnparseableIdentity {
            code: reaction.code().to_string(),
            line: record.line,
            text: record.text.clone(),
        })?;
    reaction.register(identity.organism_id, identity.species_name);
    stats.protein_records += 1;
    Ok(())
}

/// Append one measurement per sub-clause to every organism the record references.
fn dispatch_turnover(
    reaction: &mut Reaction,
    record: &LogicalRecord,
    stats: &mut ParseStats,
) -> Result<(), ParseError> {
    let parsed = extract::parse_turnover(&record.text).ok_or_else(|| {
        ParseError::MissingOrganismReference {
            code: reaction.code().to_string(),
            line: record.line,
            text: record.text.clone(),
        }
    })?;

    if let Some(range) = parsed.turnover.filter(|r| r.is_reversed()) {
        debug!(
            code = reaction.code(),
            line = record.line,
            range = %range,
            "turnover range reported with max below min"
        );
    }

    for id in &parsed.organism_ids {
        let organism = match reaction.organism_mut(id) {
            Some(organism) => organism,
            None => {
                return Err(ParseError::UnregisteredOrganism {
                    code: reaction.code().to_string(),
                    organism_id: id.to_string(),
                    line: record.line,
                })
            }
        };
        for clause in &parsed.clauses {
            organism.push_measurement(Measurement::new(
                parsed.turnover,
                parsed.substrate.clone(),
                extract::extract_scoped(clause, id),
                clause.as_str(),
            ));
            stats.measurements += 1;
        }
    }
    stats.turnover_records += 1;
    Ok(())
}

/// Parse a database stream in one pass, keeping only segments for `targets`.
#[instrument(skip_all, fields(targets = targets.len()))]
pub fn parse_reader<R: BufRead>(
    reader: R,
    targets: &TargetCodes,
    config: &ParserConfig,
) -> Result<ParseOutcome, ParseError> {
    let interval = config.effective_progress_interval().max(1) as usize;
    let mut next_progress = interval;
    let mut reassembler = Reassembler::new(reader);
    let mut segmenter = Segmenter::new(targets);

    while let Some(record) = reassembler.next() {
        segmenter.feed(record?)?;
        if reassembler.lines_read() >= next_progress {
            debug!(
                lines = reassembler.lines_read(),
                code = segmenter.current_code().unwrap_or(""),
                "parse progress"
            );
            next_progress = reassembler.lines_read() + interval;
        }
    }

    let mut outcome = segmenter.finish()?;
    outcome.stats.lines_read = reassembler.lines_read();
    outcome.stats.orphan_lines = reassembler.orphan_lines();

    info!(
        lines = outcome.stats.lines_read,
        segments = outcome.stats.segments_seen,
        sealed = outcome.stats.segments_sealed,
        measurements = outcome.stats.measurements,
        "database parsed"
    );
    Ok(outcome)
}

/// Open and parse the database file. A missing file is reported before any
/// parsing begins.
pub fn parse_file(
    path: &Path,
    targets: &TargetCodes,
    config: &ParserConfig,
) -> Result<ParseOutcome, PipelineError> {
    let file = std::fs::File::open(path).map_err(|e| SourceError::from_io(path, e))?;
    let reader = BufReader::with_capacity(1 << 20, file);
    Ok(parse_reader(reader, targets, config)?)
}
