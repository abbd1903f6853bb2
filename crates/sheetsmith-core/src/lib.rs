//! # sheetsmith-core
//!
//! Core data model for the sheetsmith document generation library.
//!
//! This crate provides the format-neutral types the writers consume:
//! - [`CellValue`] - Typed cell content (text, numbers, dates, booleans, formulas)
//! - [`Style`] - Cell and column formatting
//! - [`Row`], [`Sheet`], [`Workbook`] - The document structure
//!
//! The model is pure data: callers build it incrementally, then hand it
//! (read-only) to one of the writer crates. Invariants such as sheet-name
//! uniqueness or duplicate column indices are checked at the point of
//! mutation, never deferred to write time.
//!
//! ## Example
//!
//! ```rust
//! use sheetsmith_core::{CellValue, Row, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.add_sheet("Report").unwrap();
//!
//! let mut row = Row::new();
//! row.push(CellValue::text("Alice"));
//! row.push(CellValue::decimal(12.5).unwrap());
//! sheet.append_row(row);
//! ```

pub mod cell;
pub mod error;
pub mod row;
pub mod sheet;
pub mod style;
pub mod workbook;

// Re-exports for convenience
pub use cell::{CellType, CellValue, DateTimeValue};
pub use error::{Error, Result};
pub use row::{Cell, Row};
pub use sheet::{ColumnSpec, Sheet};
pub use workbook::Workbook;

// Re-export all style types for convenience
pub use style::{
    Border, BorderLine, Color, FormatDefaults, HorizontalAlign, Style, StyleTable,
};

/// Maximum number of rows the spreadsheet format supports (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns the spreadsheet format supports (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
