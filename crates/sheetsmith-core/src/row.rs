//! Row and cell types

use std::collections::BTreeMap;

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::style::Style;

/// A single populated cell: value plus optional style
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// The cell's value
    pub value: CellValue,
    /// Style applied to the cell (None = sheet/column default)
    pub style: Option<Style>,
}

impl Cell {
    /// Create a cell with the default style
    pub fn new(value: CellValue) -> Self {
        Self { value, style: None }
    }

    /// Create a cell with an explicit style
    pub fn styled(value: CellValue, style: Style) -> Self {
        Self {
            value,
            style: Some(style),
        }
    }
}

/// An ordered, sparse sequence of cells keyed by column index
///
/// Gaps are permitted and render as empty cells. Populating the same
/// column twice is a construction error; use [`Row::replace`] when
/// overwriting is intended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<u16, Cell>,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from values in column order starting at column 0
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let mut row = Row::new();
        for value in values {
            row.push(value.into());
        }
        row
    }

    /// Set a cell at a column index
    ///
    /// Fails with [`Error::DuplicateColumn`] if the column is already
    /// populated (with no row index; [`crate::Sheet::set_cell`] reports
    /// the real row).
    pub fn set(&mut self, col: u16, value: CellValue) -> Result<()> {
        self.insert(col, Cell::new(value))
    }

    /// Set a styled cell at a column index
    pub fn set_styled(&mut self, col: u16, value: CellValue, style: Style) -> Result<()> {
        self.insert(col, Cell::styled(value, style))
    }

    /// Append a cell after the last populated column (or at column 0)
    pub fn push(&mut self, value: CellValue) {
        let col = self.next_col();
        self.cells.insert(col, Cell::new(value));
    }

    /// Append a styled cell after the last populated column
    pub fn push_styled(&mut self, value: CellValue, style: Style) {
        let col = self.next_col();
        self.cells.insert(col, Cell::styled(value, style));
    }

    /// Overwrite a cell unconditionally, returning the previous cell if any
    pub fn replace(&mut self, col: u16, cell: Cell) -> Option<Cell> {
        self.cells.insert(col, cell)
    }

    /// Get the cell at a column index
    pub fn cell(&self, col: u16) -> Option<&Cell> {
        self.cells.get(&col)
    }

    /// Get the highest populated column index
    pub fn max_col(&self) -> Option<u16> {
        self.cells.keys().next_back().copied()
    }

    /// Get the number of populated cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no populated cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over populated cells in column order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Cell)> {
        self.cells.iter().map(|(&col, cell)| (col, cell))
    }

    fn insert(&mut self, col: u16, cell: Cell) -> Result<()> {
        if self.cells.contains_key(&col) {
            return Err(Error::DuplicateColumn { row: None, col });
        }
        self.cells.insert(col, cell);
        Ok(())
    }

    fn next_col(&self) -> u16 {
        self.max_col().map_or(0, |c| c.saturating_add(1))
    }
}
