//! Prelude module - common imports for sheetsmith users
//!
//! ```rust
//! use sheetsmith::prelude::*;
//! ```

pub use crate::{
    // Style types
    Border,
    BorderLine,
    // Cell types
    Cell,
    CellValue,
    Color,

    // Error types
    Error,
    HorizontalAlign,
    Result,

    Row,
    Sheet,
    Style,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
};

#[cfg(feature = "csv")]
pub use crate::{CsvOptions, CsvWriter};
#[cfg(feature = "xlsx")]
pub use crate::{XlsxOptions, XlsxWriter};
