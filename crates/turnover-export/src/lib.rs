//! turnover-export: turns the sealed reaction index into paginated tables.
//!
//! - [`rows`]: one [`TableRow`] per (code, organism, measurement)
//! - [`pagination`]: ceiling-division split of the ordered target codes
//! - [`sink`]: the [`TableSink`] seam plus an in-memory implementation
//! - [`xlsx`]: one workbook per page via `rust_xlsxwriter`

pub mod exporter;
pub mod pagination;
pub mod rows;
pub mod sink;
pub mod xlsx;

pub use exporter::{ExportSummary, TableExporter};
pub use pagination::{codes_per_page, paginate};
pub use rows::{reaction_rows, Cell, TableRow, COLUMNS};
pub use sink::{MemorySink, TablePage, TableSink};
pub use xlsx::XlsxSink;
