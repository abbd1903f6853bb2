//! Error types for sheetsmith-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or mutating the document model
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid sheet name (empty, too long, or forbidden characters)
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name within a workbook
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// A column index is already populated within the row
    #[error(
        "Column {col} is already populated{}",
        .row.map(|r| format!(" in row {}", r)).unwrap_or_default()
    )]
    DuplicateColumn {
        /// Row index (0-based); `None` for a standalone row not yet
        /// placed in a sheet
        row: Option<u32>,
        /// Column index (0-based)
        col: u16,
    },

    /// A decimal cell value was NaN or infinite
    #[error("Non-finite number is not a valid cell value: {0}")]
    NonFiniteNumber(f64),

    /// An invalid calendar date or time was supplied
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A column width hint was zero or negative
    #[error("Column width must be positive, got {0}")]
    InvalidColumnWidth(f64),
}
