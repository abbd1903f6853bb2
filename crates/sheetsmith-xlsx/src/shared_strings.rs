//! Shared-string pool

use ahash::AHashMap;
use quick_xml::escape::escape;
use sheetsmith_core::{CellValue, Workbook};

/// Per-write shared-string pool
///
/// Text values repeated at least `threshold` times across the workbook are
/// stored once in `xl/sharedStrings.xml` and referenced by index; the rest
/// stay inline in the sheet XML. Occurrence counts come from the
/// collection pass over the whole model; indices are assigned lazily in
/// emission order so the pool is deterministic for a given workbook.
#[derive(Debug)]
pub(crate) struct SharedStrings {
    threshold: usize,
    counts: AHashMap<String, usize>,
    pool: Vec<String>,
    index: AHashMap<String, u32>,
    references: u64,
}

impl SharedStrings {
    /// Count text occurrences across all sheets of the workbook
    pub(crate) fn collect(workbook: &Workbook, threshold: usize) -> Self {
        let mut counts: AHashMap<String, usize> = AHashMap::new();
        for sheet in workbook.sheets() {
            for (_, row) in sheet.iter_rows() {
                for (_, cell) in row.iter() {
                    if let CellValue::Text(s) = &cell.value {
                        *counts.entry(s.clone()).or_insert(0) += 1;
                    }
                }
            }
        }
        Self {
            threshold: threshold.max(1),
            counts,
            pool: Vec::new(),
            index: AHashMap::new(),
            references: 0,
        }
    }

    /// Whether any text value qualifies for pooling
    pub(crate) fn any_pooled(&self) -> bool {
        self.counts.values().any(|&n| n >= self.threshold)
    }

    /// Resolve a text value to its pool index, if it qualifies
    ///
    /// Returns `None` for values below the threshold; those are written
    /// inline by the caller.
    pub(crate) fn intern(&mut self, s: &str) -> Option<u32> {
        if self.counts.get(s).copied().unwrap_or(0) < self.threshold {
            return None;
        }
        self.references += 1;
        if let Some(&idx) = self.index.get(s) {
            return Some(idx);
        }
        let idx = self.pool.len() as u32;
        self.pool.push(s.to_string());
        self.index.insert(s.to_string(), idx);
        Some(idx)
    }

    /// Number of distinct pooled strings
    pub(crate) fn unique_count(&self) -> usize {
        self.pool.len()
    }

    /// Render `xl/sharedStrings.xml`
    pub(crate) fn to_xml(&self) -> String {
        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
            self.references,
            self.pool.len()
        );
        for s in &self.pool {
            content.push_str(&format!("\n    <si><t>{}</t></si>", escape(s.as_str())));
        }
        content.push_str("\n</sst>");
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetsmith_core::Workbook;

    fn workbook_with(values: &[&str]) -> Workbook {
        let mut wb = Workbook::new();
        let sheet = wb.add_sheet("Data").unwrap();
        for v in values {
            sheet.append_values([*v]);
        }
        wb
    }

    #[test]
    fn test_threshold_splits_pooled_and_inline() {
        let wb = workbook_with(&["yes", "yes", "no"]);
        let mut pool = SharedStrings::collect(&wb, 2);

        assert!(pool.any_pooled());
        assert_eq!(pool.intern("yes"), Some(0));
        assert_eq!(pool.intern("yes"), Some(0));
        assert_eq!(pool.intern("no"), None);
        assert_eq!(pool.unique_count(), 1);
    }

    #[test]
    fn test_threshold_one_pools_everything() {
        let wb = workbook_with(&["a", "b"]);
        let mut pool = SharedStrings::collect(&wb, 1);

        assert_eq!(pool.intern("a"), Some(0));
        assert_eq!(pool.intern("b"), Some(1));
    }

    #[test]
    fn test_nothing_qualifies() {
        let wb = workbook_with(&["a", "b"]);
        let pool = SharedStrings::collect(&wb, 2);
        assert!(!pool.any_pooled());
    }

    #[test]
    fn test_xml_counts() {
        let wb = workbook_with(&["x", "x", "x"]);
        let mut pool = SharedStrings::collect(&wb, 2);
        for _ in 0..3 {
            pool.intern("x");
        }

        let xml = pool.to_xml();
        assert!(xml.contains(r#"count="3" uniqueCount="1""#));
        assert!(xml.contains("<si><t>x</t></si>"));
    }
}
