//! Workbook type - the main document structure

use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook: an ordered collection of sheets
///
/// Workbooks start empty; a valid spreadsheet export needs at least one
/// sheet, which the spreadsheet writer enforces. Delimited-text export
/// uses exactly the first sheet.
///
/// A workbook is not internally synchronized. One writer consumes one
/// workbook at a time; mutating a workbook while a write is in progress
/// is a caller-side contract violation. Independent workbooks may be
/// built and written concurrently from separate threads.
#[derive(Debug, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create a new empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Add a sheet with the given name, returning a mutable reference to it
    ///
    /// The name must be non-empty, at most [`MAX_SHEET_NAME_LEN`]
    /// characters, free of the characters `: \ / ? * [ ]`, and unique
    /// within the workbook (case-insensitive). Violations fail here, at
    /// the point of mutation.
    pub fn add_sheet(&mut self, name: &str) -> Result<&mut Sheet> {
        self.validate_sheet_name(name)?;
        self.sheets.push(Sheet::new(name));
        Ok(self.sheets.last_mut().expect("sheet just pushed"))
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Get a mutable sheet by name
    pub fn sheet_by_name_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name() == name)
    }

    /// Iterate over all sheets in order
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Get the first sheet (the one delimited-text export uses)
    pub fn first_sheet(&self) -> Option<&Sheet> {
        self.sheets.first()
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        for c in INVALID_CHARS {
            if name.contains(*c) {
                return Err(Error::InvalidSheetName(format!(
                    "name cannot contain '{}'",
                    c
                )));
            }
        }

        // Duplicate check is case-insensitive, matching the spreadsheet format
        let name_lower = name.to_lowercase();
        if self
            .sheets
            .iter()
            .any(|s| s.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}
