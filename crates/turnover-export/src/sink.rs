//! Output seam for finished pages.

use serde::Serialize;
use turnover_core::errors::ExportError;

use crate::rows::TableRow;

/// One output artifact's worth of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage {
    /// 1-based page number.
    pub number: usize,
    /// Target codes assigned to this page, including ones with no rows.
    pub codes: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// Receives each page once, after it is complete.
pub trait TableSink {
    fn write_page(&mut self, page: &TablePage) -> Result<(), ExportError>;
}

/// In-memory sink for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    pages: Vec<TablePage>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[TablePage] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl TableSink for MemorySink {
    fn write_page(&mut self, page: &TablePage) -> Result<(), ExportError> {
        self.pages.push(page.clone());
        Ok(())
    }
}
