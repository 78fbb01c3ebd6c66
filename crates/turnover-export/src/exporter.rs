//! Table exporter: reaction index → rows → pages → sink.

use serde::Serialize;
use tracing::{info, instrument, warn};
use turnover_core::errors::ExportError;
use turnover_core::types::{ReactionIndex, TargetCodes};

use crate::pagination;
use crate::rows::{reaction_rows, TableRow};
use crate::sink::{TablePage, TableSink};

/// What an export run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub pages_written: usize,
    pub rows_written: usize,
    /// Target codes with no segment in the database, in target order.
    pub missing_codes: Vec<String>,
}

/// Reads a sealed index and emits pages in target-code order.
pub struct TableExporter<'a> {
    index: &'a ReactionIndex,
    targets: &'a TargetCodes,
}

impl<'a> TableExporter<'a> {
    pub fn new(index: &'a ReactionIndex, targets: &'a TargetCodes) -> Self {
        Self { index, targets }
    }

    /// Rows for one code; empty when the code never appeared.
    pub fn rows_for(&self, code: &str) -> Vec<TableRow> {
        self.index
            .get(code)
            .map(|reaction| reaction_rows(reaction).collect())
            .unwrap_or_default()
    }

    /// Build every page without writing it.
    pub fn pages(&self, pages: usize) -> Result<Vec<TablePage>, ExportError> {
        let chunks = pagination::paginate(self.targets.as_slice(), pages)?;
        Ok(chunks
            .into_iter()
            .enumerate()
            .map(|(i, codes)| TablePage {
                number: i + 1,
                codes: codes.to_vec(),
                rows: codes.iter().flat_map(|code| self.rows_for(code)).collect(),
            })
            .collect())
    }

    /// Split the target codes over at most `pages` pages and hand each
    /// finished page to `sink`.
    #[instrument(skip(self, sink), fields(codes = self.targets.len()))]
    pub fn export(
        &self,
        pages: usize,
        sink: &mut dyn TableSink,
    ) -> Result<ExportSummary, ExportError> {
        let missing_codes: Vec<String> = self
            .targets
            .iter()
            .filter(|code| !self.index.contains(code))
            .map(str::to_string)
            .collect();
        if !missing_codes.is_empty() {
            warn!(
                count = missing_codes.len(),
                codes = ?missing_codes,
                "target codes not found in database"
            );
        }

        let mut summary = ExportSummary {
            missing_codes,
            ..ExportSummary::default()
        };
        for page in self.pages(pages)? {
            sink.write_page(&page)?;
            info!(
                page = page.number,
                codes = page.codes.len(),
                rows = page.rows.len(),
                "page written"
            );
            summary.pages_written += 1;
            summary.rows_written += page.rows.len();
        }
        Ok(summary)
    }
}
