//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while writing delimited text
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The workbook has no sheets to export
    #[error("Workbook has no sheets")]
    EmptyWorkbook,

    /// Core model error
    #[error("Core error: {0}")]
    Core(#[from] sheetsmith_core::Error),
}
