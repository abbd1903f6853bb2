//! # sheetsmith-csv
//!
//! Delimited-text writer for sheetsmith.
//!
//! Renders one [`Sheet`](sheetsmith_core::Sheet) as a delimited character
//! stream. Styles are ignored; cell values are rendered through their
//! canonical text form, and fields containing the delimiter, the quote
//! character, or a line break are quoted with inner quotes doubled.

mod error;
mod options;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvOptions, LineTerminator};
pub use writer::CsvWriter;
