//! Folds raw database lines into tagged logical records.
//!
//! A line starting with a known tag followed by a tab opens a record. Any
//! other non-blank line continues the open record and is space-joined onto
//! it. Section header lines (`PROTEIN`, `TURNOVER_NUMBER`, ...) are dropped.

use std::io::BufRead;

use serde::Serialize;
use turnover_core::errors::ParseError;

use super::kind::FieldKind;

/// Line closing a database entry.
pub const ENTRY_TERMINATOR: &str = "///";

/// One field value with its continuation lines folded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogicalRecord {
    pub kind: FieldKind,
    /// Record text without the leading tag.
    pub text: String,
    /// 1-based line number of the tag line.
    pub line: usize,
}

/// Streaming reassembler; holds at most one open record.
pub struct Reassembler<R> {
    lines: std::io::Lines<R>,
    open: Option<LogicalRecord>,
    line_no: usize,
    orphan_lines: usize,
    finished: bool,
}

impl<R: BufRead> Reassembler<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            open: None,
            line_no: 0,
            orphan_lines: 0,
            finished: false,
        }
    }

    /// Raw lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Continuation lines that arrived with no open record.
    pub fn orphan_lines(&self) -> usize {
        self.orphan_lines
    }

    fn open_record(&mut self, record: LogicalRecord) -> Option<LogicalRecord> {
        self.open.replace(record)
    }

    fn continue_record(&mut self, text: &str) {
        match self.open.as_mut() {
            Some(record) => {
                if !record.text.is_empty() {
                    record.text.push(' ');
                }
                record.text.push_str(text);
            }
            None => self.orphan_lines += 1,
        }
    }
}

/// Split a tag line into its kind and body. The tag must start the line and
/// be followed by a tab or the end of the line.
fn split_tag(line: &str) -> Option<(FieldKind, &str)> {
    let (tag, body) = match line.split_once('\t') {
        Some((tag, body)) => (tag, body),
        None => (line, ""),
    };
    FieldKind::from_tag(tag).map(|kind| (kind, body.trim()))
}

impl<R: BufRead> Iterator for Reassembler<R> {
    type Item = Result<LogicalRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(source)) => {
                    self.finished = true;
                    return Some(Err(ParseError::Read {
                        line: self.line_no + 1,
                        source,
                    }));
                }
                None => {
                    self.finished = true;
                    return self.open.take().map(Ok);
                }
            };
            self.line_no += 1;

            let line = line.trim_end();
            let content = line.trim_start();
            if content.is_empty() || FieldKind::is_display_name(content) {
                continue;
            }
            if content == ENTRY_TERMINATOR {
                if let Some(record) = self.open.take() {
                    return Some(Ok(record));
                }
                continue;
            }

            match split_tag(line) {
                Some((kind, body)) => {
                    let record = LogicalRecord {
                        kind,
                        text: body.to_string(),
                        line: self.line_no,
                    };
                    if let Some(previous) = self.open_record(record) {
                        return Some(Ok(previous));
                    }
                }
                None => self.continue_record(content),
            }
        }
    }
}
