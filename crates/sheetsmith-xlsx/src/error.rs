//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while writing an XLSX container
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP packaging error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The workbook has no sheets to export
    #[error("Workbook has no sheets")]
    EmptyWorkbook,

    /// A cell position exceeds the format's row/column ceiling
    #[error(
        "Sheet '{sheet}' exceeds the format limit at row {row}, column {col} \
         (max {max_rows} rows x {max_cols} columns)"
    )]
    CapacityExceeded {
        /// Offending sheet name
        sheet: String,
        /// Offending row index (0-based)
        row: u32,
        /// Offending column index (0-based)
        col: u16,
        /// Row ceiling in effect
        max_rows: u32,
        /// Column ceiling in effect
        max_cols: u16,
    },

    /// A date precedes the 1900 date system and cannot be encoded
    #[error(
        "Sheet '{sheet}' has date {date} at row {row}, column {col}, \
         which precedes the format's 1900-01-01 epoch"
    )]
    DateOutOfRange {
        /// Offending sheet name
        sheet: String,
        /// Offending row index (0-based)
        row: u32,
        /// Offending column index (0-based)
        col: u16,
        /// The rejected date in its canonical text form
        date: String,
    },

    /// Core model error
    #[error("Core error: {0}")]
    Core(#[from] sheetsmith_core::Error),
}
