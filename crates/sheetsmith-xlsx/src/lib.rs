//! # sheetsmith-xlsx
//!
//! XLSX writer for sheetsmith.
//!
//! Converts a [`Workbook`](sheetsmith_core::Workbook) into an Office Open
//! XML spreadsheet container. The writer owns the logical structures
//! (sheet grids, the deduplicated style table, the shared-string pool)
//! and hands finished parts to a [`Container`], which does the physical
//! ZIP packaging. Tests substitute [`MemContainer`] to inspect the parts
//! without unzipping anything.

mod container;
mod error;
mod options;
mod serial;
mod shared_strings;
mod styles;
mod writer;

pub use container::{Container, MemContainer, ZipContainer};
pub use error::{XlsxError, XlsxResult};
pub use options::XlsxOptions;
pub use writer::XlsxWriter;
