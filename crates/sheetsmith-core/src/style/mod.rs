//! Cell styling types
//!
//! This module contains types for cell and column formatting:
//! - [`Style`] - Complete style descriptor
//! - [`Color`] - Color representation with the named palette
//! - [`Border`] - Per-edge border settings
//! - [`StyleTable`] - Deduplicated style arena used by the spreadsheet writer

mod table;

pub use table::StyleTable;

use crate::cell::CellValue;

/// Immutable description of the formatting applied to a cell or column
///
/// Two descriptors with identical attributes compare equal and are
/// deduplicated into one shared style-table entry by the spreadsheet
/// writer. Built with the consuming builder methods:
///
/// ```rust
/// use sheetsmith_core::{Color, Style};
///
/// let header = Style::new().bold(true).background(Color::GREY);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Horizontal text alignment
    pub horizontal_align: HorizontalAlign,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Font color (None = automatic)
    pub font_color: Option<Color>,
    /// Background fill color (None = no fill)
    pub background: Option<Color>,
    /// Cell borders
    pub border: Border,
    /// Explicit numeric display format pattern
    pub number_format: Option<String>,
    /// Column width hint in character units
    pub column_width: Option<f64>,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = align;
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Set background fill color
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set all four border edges to the same line
    pub fn border(mut self, line: BorderLine) -> Self {
        self.border = Border::all(line);
        self
    }

    /// Set individual border edges
    pub fn border_edges(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Set an explicit number format pattern
    pub fn number_format<S: Into<String>>(mut self, pattern: S) -> Self {
        self.number_format = Some(pattern.into());
        self
    }

    /// Set the column width hint in character units
    pub fn column_width(mut self, width: f64) -> Self {
        self.column_width = Some(width);
        self
    }

    /// Check whether this is the default (all-unset) style
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }

    /// Resolve the number format to apply for a given cell value
    ///
    /// An explicit pattern always wins. Otherwise the format is derived
    /// from the value's semantic type: date-only `DateTime` values get the
    /// default date pattern, date-times the default date-time pattern, and
    /// `Decimal` values the default decimal pattern. This fallback rule is
    /// centralized here; neither writer duplicates it.
    pub fn effective_number_format<'a>(
        &'a self,
        value: &CellValue,
        defaults: &'a FormatDefaults,
    ) -> Option<&'a str> {
        if let Some(pattern) = &self.number_format {
            return Some(pattern);
        }
        match value {
            CellValue::DateTime(dt) if dt.is_date_only() => Some(&defaults.date),
            CellValue::DateTime(_) => Some(&defaults.date_time),
            CellValue::Decimal(_) => Some(&defaults.decimal),
            _ => None,
        }
    }
}

impl std::hash::Hash for Style {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.horizontal_align.hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.font_color.hash(state);
        self.background.hash(state);
        self.border.hash(state);
        self.number_format.hash(state);
        self.column_width.map(f64::to_bits).hash(state);
    }
}

impl Eq for Style {}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Black
    pub const BLACK: Self = Color::rgb(0x00, 0x00, 0x00);
    /// White
    pub const WHITE: Self = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Red
    pub const RED: Self = Color::rgb(0xFF, 0x00, 0x00);
    /// Blue
    pub const BLUE: Self = Color::rgb(0x00, 0x00, 0xFF);
    /// Green
    pub const GREEN: Self = Color::rgb(0x00, 0x80, 0x00);
    /// Yellow
    pub const YELLOW: Self = Color::rgb(0xFF, 0xFF, 0x00);
    /// 50% grey
    pub const GREY: Self = Color::rgb(0x80, 0x80, 0x80);
    /// Orange
    pub const ORANGE: Self = Color::rgb(0xFF, 0xA5, 0x00);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    /// Convert to an ARGB hex string with full opacity (e.g., "FFFF0000")
    pub fn to_argb_hex(&self) -> String {
        format!("FF{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Border line weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLine {
    /// No border
    #[default]
    None,
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
}

/// Per-edge border settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Border {
    /// Top edge
    pub top: BorderLine,
    /// Bottom edge
    pub bottom: BorderLine,
    /// Left edge
    pub left: BorderLine,
    /// Right edge
    pub right: BorderLine,
}

impl Border {
    /// Create a border with all four edges set to the same line
    pub const fn all(line: BorderLine) -> Self {
        Border {
            top: line,
            bottom: line,
            left: line,
            right: line,
        }
    }

    /// Check whether no edge has a border
    pub fn is_none(&self) -> bool {
        *self == Border::default()
    }
}

/// Default number-format patterns applied when a style has no explicit one
///
/// Carried by the spreadsheet writer's options so callers can override the
/// global fallbacks without touching individual styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDefaults {
    /// Pattern for date-only values
    pub date: String,
    /// Pattern for date-time values
    pub date_time: String,
    /// Pattern for decimal values
    pub decimal: String,
}

impl Default for FormatDefaults {
    fn default() -> Self {
        Self {
            date: "yyyy-mm-dd".into(),
            date_time: "yyyy-mm-dd hh:mm:ss".into(),
            decimal: "0.00".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structural_equality() {
        let a = Style::new().bold(true).background(Color::RED);
        let b = Style::new().bold(true).background(Color::RED);
        let c = Style::new().italic(true);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, a.clone().font_color(Color::WHITE));
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("ffa500"), Some(Color::ORANGE));
        assert_eq!(Color::from_hex("nope"), None);
        assert_eq!(Color::RED.to_argb_hex(), "FFFF0000");
    }

    #[test]
    fn test_effective_number_format_explicit_wins() {
        let style = Style::new().number_format("#,##0");
        let defaults = FormatDefaults::default();
        let value = CellValue::decimal(1234.5).unwrap();

        assert_eq!(
            style.effective_number_format(&value, &defaults),
            Some("#,##0")
        );
    }

    #[test]
    fn test_effective_number_format_fallbacks() {
        let style = Style::new();
        let defaults = FormatDefaults::default();

        let date = CellValue::ymd(2025, 1, 15).unwrap();
        let dt = CellValue::ymd_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let dec = CellValue::decimal(1.5).unwrap();
        let text = CellValue::text("x");

        assert_eq!(
            style.effective_number_format(&date, &defaults),
            Some("yyyy-mm-dd")
        );
        assert_eq!(
            style.effective_number_format(&dt, &defaults),
            Some("yyyy-mm-dd hh:mm:ss")
        );
        assert_eq!(style.effective_number_format(&dec, &defaults), Some("0.00"));
        assert_eq!(style.effective_number_format(&text, &defaults), None);
    }
}
