//! Spreadsheet sink: one `.xlsx` workbook per page.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::debug;
use turnover_core::config::ExportConfig;
use turnover_core::errors::ExportError;

use crate::rows::{Cell, COLUMNS};
use crate::sink::{TablePage, TableSink};

/// Writes `<output_dir>/<file_prefix><n>.xlsx` with a single named sheet.
#[derive(Debug, Clone)]
pub struct XlsxSink {
    output_dir: PathBuf,
    file_prefix: String,
    sheet_name: String,
    written: Vec<PathBuf>,
}

impl XlsxSink {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        file_prefix: impl Into<String>,
        sheet_name: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_prefix: file_prefix.into(),
            sheet_name: sheet_name.into(),
            written: Vec::new(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(
            config.effective_output_dir(),
            config.effective_file_prefix(),
            config.effective_sheet_name(),
        )
    }

    pub fn page_path(&self, number: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.xlsx", self.file_prefix, number))
    }

    /// Files written so far, in page order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn build_workbook(&self, page: &TablePage) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, title) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }
        for (i, row) in page.rows.iter().enumerate() {
            let row_num = (i + 1) as u32;
            for (col, cell) in row.cells.iter().enumerate() {
                write_cell(worksheet, row_num, col as u16, cell)?;
            }
        }
        Ok(workbook)
    }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<(), XlsxError> {
    match cell {
        Cell::Text(text) => {
            worksheet.write_string(row, col, text)?;
        }
        Cell::Number(value) => {
            worksheet.write_number(row, col, *value)?;
        }
        Cell::Empty => {}
    }
    Ok(())
}

fn spreadsheet_error(path: &Path, err: XlsxError) -> ExportError {
    ExportError::Spreadsheet {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

impl TableSink for XlsxSink {
    fn write_page(&mut self, page: &TablePage) -> Result<(), ExportError> {
        let path = self.page_path(page.number);
        std::fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut workbook = self
            .build_workbook(page)
            .map_err(|e| spreadsheet_error(&path, e))?;
        workbook.save(&path).map_err(|e| spreadsheet_error(&path, e))?;

        debug!(path = %path.display(), rows = page.rows.len(), "workbook saved");
        self.written.push(path);
        Ok(())
    }
}
