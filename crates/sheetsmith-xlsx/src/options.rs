//! XLSX writer options

use sheetsmith_core::{FormatDefaults, MAX_COLS, MAX_ROWS};

/// Options for writing XLSX
#[derive(Debug, Clone)]
pub struct XlsxOptions {
    /// Minimum number of occurrences before a text value is moved into
    /// the shared-string table; values below the threshold are written
    /// inline. 0 or 1 pools every text value.
    pub shared_string_threshold: usize,
    /// Row ceiling; may only lower the format's hard limit
    pub max_rows: u32,
    /// Column ceiling; may only lower the format's hard limit
    pub max_cols: u16,
    /// Fallback number-format patterns for styles without an explicit one
    pub formats: FormatDefaults,
}

impl Default for XlsxOptions {
    fn default() -> Self {
        Self {
            shared_string_threshold: 2,
            max_rows: MAX_ROWS,
            max_cols: MAX_COLS,
            formats: FormatDefaults::default(),
        }
    }
}

impl XlsxOptions {
    /// Effective row ceiling (never above the format's hard limit)
    pub(crate) fn row_limit(&self) -> u32 {
        self.max_rows.min(MAX_ROWS)
    }

    /// Effective column ceiling (never above the format's hard limit)
    pub(crate) fn col_limit(&self) -> u16 {
        self.max_cols.min(MAX_COLS)
    }
}
