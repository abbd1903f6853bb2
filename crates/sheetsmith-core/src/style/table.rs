//! Style table for deduplication

use super::Style;
use ahash::AHashMap;

/// Content-addressed style arena
///
/// Generated documents typically have many cells sharing the same style.
/// The table assigns each distinct style a stable index in first-seen
/// order; cells then reference styles by index so the output style table
/// stays bounded regardless of how many cells share a descriptor.
///
/// The spreadsheet writer builds one fresh per write call; nothing is
/// cached across writes.
#[derive(Debug)]
pub struct StyleTable {
    /// All unique styles (index 0 is default)
    styles: Vec<Style>,
    /// Fast lookup for deduplication
    index_map: AHashMap<Style, u32>,
}

impl StyleTable {
    /// Create a new style table with the default style at index 0
    pub fn new() -> Self {
        let mut table = Self {
            styles: Vec::with_capacity(16),
            index_map: AHashMap::with_capacity(16),
        };

        let default = Style::default();
        table.styles.push(default.clone());
        table.index_map.insert(default, 0);

        table
    }

    /// Get or create a style entry, returning its index
    ///
    /// If an identical style already exists, returns its index.
    /// Otherwise, appends the style and returns the new index.
    pub fn get_or_insert(&mut self, style: &Style) -> u32 {
        if let Some(&idx) = self.index_map.get(style) {
            return idx;
        }

        let idx = self.styles.len() as u32;
        self.styles.push(style.clone());
        self.index_map.insert(style.clone(), idx);
        idx
    }

    /// Get a style by index
    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    /// Look up the index of a style without inserting
    pub fn index_of(&self, style: &Style) -> Option<u32> {
        self.index_map.get(style).copied()
    }

    /// Get the number of entries (including the default at index 0)
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the table only holds the default style
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Iterate over all styles with their indices
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Style)> {
        self.styles.iter().enumerate().map(|(i, s)| (i as u32, s))
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
