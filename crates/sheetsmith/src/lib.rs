//! # sheetsmith
//!
//! A Rust library for generating spreadsheet and delimited-text documents.
//!
//! Sheetsmith is write-only: callers build an in-memory [`Workbook`] and
//! hand it to one of the writers. There is no reading, editing, or formula
//! evaluation.
//!
//! ## Features
//!
//! - Write XLSX files (Office Open XML)
//! - Write CSV and other delimited-text files
//! - Typed cell values (text, integers, decimals, dates, booleans, formulas)
//! - Cell and column styling with automatic style deduplication
//! - Shared-string pooling for repeated text
//!
//! ## Example
//!
//! ```rust
//! use sheetsmith::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.add_sheet("Report").unwrap();
//!
//! let header = Style::new().bold(true);
//! let mut row = Row::new();
//! row.push_styled(CellValue::text("Name"), header.clone());
//! row.push_styled(CellValue::text("Amount"), header);
//! sheet.append_row(row);
//!
//! let mut data = Row::new();
//! data.push(CellValue::text("Alice"));
//! data.push(CellValue::decimal(12.5).unwrap());
//! sheet.append_row(data);
//!
//! // workbook.save("report.xlsx").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use sheetsmith_core::{
    Border,
    BorderLine,
    // Cell types
    Cell,
    CellType,
    CellValue,
    Color,
    ColumnSpec,
    DateTimeValue,
    // Error types
    Error,
    FormatDefaults,
    HorizontalAlign,
    Result,
    Row,
    Sheet,
    // Style types
    Style,
    StyleTable,
    // Main types
    Workbook,

    MAX_COLS,
    // Constants
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export writer types
#[cfg(feature = "csv")]
pub use sheetsmith_csv::{CsvError, CsvOptions, CsvWriter, LineTerminator};
#[cfg(feature = "xlsx")]
pub use sheetsmith_xlsx::{XlsxError, XlsxOptions, XlsxWriter};

use std::path::Path;
use thiserror::Error as ThisError;

/// Errors from extension-dispatched saving
#[derive(Debug, ThisError)]
pub enum SaveError {
    /// XLSX writer failure
    #[cfg(feature = "xlsx")]
    #[error(transparent)]
    Xlsx(#[from] sheetsmith_xlsx::XlsxError),

    /// Delimited-text writer failure
    #[cfg(feature = "csv")]
    #[error(transparent)]
    Csv(#[from] sheetsmith_csv::CsvError),

    /// The path's extension maps to no enabled writer
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Extension trait adding file output to [`Workbook`]
///
/// Dispatches on the path's extension: `.xlsx` goes through
/// [`XlsxWriter`], `.csv` through [`CsvWriter`] with default options.
/// Callers needing non-default options use the writers directly.
pub trait WorkbookExt {
    /// Save the workbook to a file, picking the writer by extension
    fn save<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), SaveError>;
}

impl WorkbookExt for Workbook {
    fn save<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), SaveError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            #[cfg(feature = "xlsx")]
            Some("xlsx") => {
                XlsxWriter::new().write_file(self, path)?;
                Ok(())
            }
            #[cfg(feature = "csv")]
            Some("csv") => {
                // goes through the workbook path so extra sheets are
                // skipped with the warning signal
                CsvWriter::write_workbook_file(self, path, &CsvOptions::default())?;
                Ok(())
            }
            _ => Err(SaveError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
