//! Sheet type

use std::collections::BTreeMap;

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::row::{Cell, Row};
use crate::style::Style;

/// Per-column metadata: width and default style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSpec {
    /// Custom width in character units (None = format default)
    pub width: Option<f64>,
    /// Default style applied to cells without an explicit one
    pub style: Option<Style>,
}

impl ColumnSpec {
    /// Check if this column carries no custom settings
    pub fn is_default(&self) -> bool {
        self.width.is_none() && self.style.is_none()
    }
}

/// One named grid of rows and columns within a workbook
///
/// Rows are held in order; `append_row` is the hot path and is O(1).
/// Random access by `(row, col)` indexes the row vector directly and the
/// column map logarithmically; no path rescans prior rows.
#[derive(Debug)]
pub struct Sheet {
    /// Sheet name (validated by the owning workbook)
    name: String,
    /// Rows in order; the vector index is the row index
    rows: Vec<Row>,
    /// Column metadata keyed by column index
    columns: BTreeMap<u16, ColumnSpec>,
}

impl Sheet {
    pub(crate) fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            columns: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of rows (including interior empty rows)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row at the end of the sheet
    pub fn append_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Append a row built from values in column order
    pub fn append_values<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.rows.push(Row::from_values(values));
    }

    /// Set a cell at (row, col), growing the sheet with empty rows as needed
    ///
    /// Fails with [`Error::DuplicateColumn`] if the position is already
    /// populated.
    pub fn set_cell(&mut self, row: u32, col: u16, value: CellValue) -> Result<()> {
        self.set(row, col, Cell::new(value))
    }

    /// Set a styled cell at (row, col)
    pub fn set_cell_styled(
        &mut self,
        row: u32,
        col: u16,
        value: CellValue,
        style: Style,
    ) -> Result<()> {
        self.set(row, col, Cell::styled(value, style))
    }

    /// Get the cell at (row, col)
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(row as usize).and_then(|r| r.cell(col))
    }

    /// Get a row by index
    pub fn row(&self, row: u32) -> Option<&Row> {
        self.rows.get(row as usize)
    }

    /// Iterate over rows in order with their indices
    pub fn iter_rows(&self) -> impl Iterator<Item = (u32, &Row)> {
        self.rows.iter().enumerate().map(|(i, r)| (i as u32, r))
    }

    /// Set a column width hint in character units
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidColumnWidth(width));
        }
        self.columns.entry(col).or_default().width = Some(width);
        Ok(())
    }

    /// Set a column default style
    pub fn set_column_style(&mut self, col: u16, style: Style) {
        self.columns.entry(col).or_default().style = Some(style);
    }

    /// Get the metadata for a column, if any was set
    pub fn column(&self, col: u16) -> Option<&ColumnSpec> {
        self.columns.get(&col)
    }

    /// Iterate over columns with custom metadata, in index order
    pub fn iter_columns(&self) -> impl Iterator<Item = (u16, &ColumnSpec)> {
        self.columns.iter().map(|(&col, spec)| (col, spec))
    }

    /// Get the highest populated column index across all rows
    pub fn max_col(&self) -> Option<u16> {
        self.rows.iter().filter_map(Row::max_col).max()
    }

    fn set(&mut self, row: u32, col: u16, cell: Cell) -> Result<()> {
        let idx = row as usize;
        if idx >= self.rows.len() {
            self.rows.resize_with(idx + 1, Row::new);
        }
        if self.rows[idx].cell(col).is_some() {
            return Err(Error::DuplicateColumn {
                row: Some(row),
                col,
            });
        }
        self.rows[idx].replace(col, cell);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_cell_grows_rows() {
        let mut sheet = Sheet::new("Data");
        sheet.set_cell(4, 2, CellValue::integer(7)).unwrap();

        assert_eq!(sheet.row_count(), 5);
        assert!(sheet.row(0).unwrap().is_empty());
        assert_eq!(sheet.cell(4, 2).unwrap().value, CellValue::Integer(7));
    }

    #[test]
    fn test_duplicate_cell_reports_position() {
        let mut sheet = Sheet::new("Data");
        sheet.set_cell(1, 3, CellValue::text("x")).unwrap();

        let err = sheet.set_cell(1, 3, CellValue::text("y")).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateColumn {
                row: Some(1),
                col: 3
            }
        ));
    }

    #[test]
    fn test_column_width_validation() {
        let mut sheet = Sheet::new("Data");
        assert!(sheet.set_column_width(0, 18.0).is_ok());
        assert!(sheet.set_column_width(0, 0.0).is_err());
        assert!(sheet.set_column_width(0, -3.0).is_err());
        assert!(sheet.set_column_width(0, f64::NAN).is_err());

        assert_eq!(sheet.column(0).unwrap().width, Some(18.0));
    }

    #[test]
    fn test_max_col() {
        let mut sheet = Sheet::new("Data");
        assert_eq!(sheet.max_col(), None);

        sheet.append_values(["a", "b"]);
        let mut sparse = Row::new();
        sparse.set(5, CellValue::text("far")).unwrap();
        sheet.append_row(sparse);

        assert_eq!(sheet.max_col(), Some(5));
    }
}
