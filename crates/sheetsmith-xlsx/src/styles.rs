//! Style table construction and styles.xml rendering

use ahash::AHashMap;
use quick_xml::escape::escape;
use sheetsmith_core::{
    Border, BorderLine, Cell, Color, ColumnSpec, FormatDefaults, HorizontalAlign, Style,
    StyleTable, Workbook,
};

/// First id available for custom number formats (below are built-ins)
const FIRST_CUSTOM_NUMFMT_ID: u32 = 164;

/// Key under which a style is interned for cellXfs
///
/// Column width rides on the `<col>` element, never on an xf, so it is
/// excluded here; otherwise styles differing only in width would produce
/// duplicate identical xf entries.
pub(crate) fn xf_key(style: &Style) -> Style {
    Style {
        column_width: None,
        ..style.clone()
    }
}

/// Resolve the cell-level style the writer must register and reference
///
/// The base is the cell's own style, falling back to the column default.
/// If the base carries no explicit number format but the value's semantic
/// type implies one (dates, decimals), a derived style with the resolved
/// pattern is materialized so the value displays correctly. Returns `None`
/// when the cell needs no `s` attribute at all (default style, or the
/// column-level style already covers it).
pub(crate) fn resolve_cell_style(
    cell: &Cell,
    column: Option<&ColumnSpec>,
    defaults: &FormatDefaults,
) -> Option<Style> {
    let column_style = column.and_then(|c| c.style.as_ref());
    let base = cell.style.as_ref().or(column_style);

    match base {
        Some(style) => {
            if style.number_format.is_none() {
                if let Some(pattern) = style.effective_number_format(&cell.value, defaults) {
                    let pattern = pattern.to_string();
                    return Some(xf_key(style).number_format(pattern));
                }
            }
            // Column-level styles apply through the <col> element; only
            // cell-level styles need an explicit reference.
            cell.style.is_some().then(|| xf_key(style))
        }
        None => {
            let default = Style::default();
            default
                .effective_number_format(&cell.value, defaults)
                .map(|pattern| Style::new().number_format(pattern))
        }
    }
}

/// Build the deduplicated style table for a whole workbook
///
/// One pass over every sheet, collecting column default styles and
/// (possibly derived) cell styles in first-seen order. O(total cells).
pub(crate) fn build_style_table(workbook: &Workbook, defaults: &FormatDefaults) -> StyleTable {
    let mut table = StyleTable::new();
    for sheet in workbook.sheets() {
        for (_, spec) in sheet.iter_columns() {
            if let Some(style) = &spec.style {
                table.get_or_insert(&xf_key(style));
            }
        }
        for (_, row) in sheet.iter_rows() {
            for (col, cell) in row.iter() {
                if let Some(style) = resolve_cell_style(cell, sheet.column(col), defaults) {
                    table.get_or_insert(&style);
                }
            }
        }
    }
    table
}

/// Render `xl/styles.xml` from the deduplicated style table
///
/// Fonts, fills, borders, and custom number formats are themselves
/// deduplicated into component tables; each cellXf lines up with the
/// style-table index so the sheet writer can reference styles directly.
pub(crate) fn to_styles_xml(table: &StyleTable) -> String {
    // Component tables
    type FontKey = (bool, bool, Option<Color>);
    let mut font_ids: AHashMap<FontKey, u32> = AHashMap::new();
    let mut fonts: Vec<FontKey> = vec![(false, false, None)];
    font_ids.insert((false, false, None), 0);

    let mut fill_ids: AHashMap<Color, u32> = AHashMap::new();
    // The format requires fills 0 and 1 to be none and gray125
    let mut fills: Vec<Option<Color>> = vec![None, None];

    let mut border_ids: AHashMap<Border, u32> = AHashMap::new();
    let mut borders: Vec<Border> = vec![Border::default()];
    border_ids.insert(Border::default(), 0);

    let mut numfmt_ids: AHashMap<&str, u32> = AHashMap::new();
    let mut numfmts: Vec<(u32, &str)> = Vec::new();

    struct ResolvedXf {
        num_fmt_id: u32,
        font_id: u32,
        fill_id: u32,
        border_id: u32,
        align: HorizontalAlign,
    }

    let mut xfs: Vec<ResolvedXf> = Vec::with_capacity(table.len());

    for (_, style) in table.iter() {
        let font_key = (style.bold, style.italic, style.font_color);
        let font_id = *font_ids.entry(font_key).or_insert_with(|| {
            fonts.push(font_key);
            (fonts.len() - 1) as u32
        });

        let fill_id = match style.background {
            None => 0,
            Some(color) => *fill_ids.entry(color).or_insert_with(|| {
                fills.push(Some(color));
                (fills.len() - 1) as u32
            }),
        };

        let border_id = *border_ids.entry(style.border).or_insert_with(|| {
            borders.push(style.border);
            (borders.len() - 1) as u32
        });

        let num_fmt_id = match &style.number_format {
            None => 0,
            Some(pattern) => *numfmt_ids.entry(pattern).or_insert_with(|| {
                let id = FIRST_CUSTOM_NUMFMT_ID + numfmts.len() as u32;
                numfmts.push((id, pattern));
                id
            }),
        };

        xfs.push(ResolvedXf {
            num_fmt_id,
            font_id,
            fill_id,
            border_id,
            align: style.horizontal_align,
        });
    }

    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    if !numfmts.is_empty() {
        content.push_str(&format!("\n    <numFmts count=\"{}\">", numfmts.len()));
        for (id, pattern) in &numfmts {
            content.push_str(&format!(
                "\n        <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                id,
                escape(*pattern)
            ));
        }
        content.push_str("\n    </numFmts>");
    }

    content.push_str(&format!("\n    <fonts count=\"{}\">", fonts.len()));
    for (bold, italic, color) in &fonts {
        content.push_str("\n        <font>");
        if *bold {
            content.push_str("<b/>");
        }
        if *italic {
            content.push_str("<i/>");
        }
        content.push_str(r#"<sz val="11"/>"#);
        if let Some(color) = color {
            content.push_str(&format!("<color rgb=\"{}\"/>", color.to_argb_hex()));
        }
        content.push_str(r#"<name val="Calibri"/></font>"#);
    }
    content.push_str("\n    </fonts>");

    content.push_str(&format!("\n    <fills count=\"{}\">", fills.len()));
    content.push_str(r#"
        <fill><patternFill patternType="none"/></fill>
        <fill><patternFill patternType="gray125"/></fill>"#);
    for color in fills.iter().skip(2).flatten() {
        content.push_str(&format!(
            "\n        <fill><patternFill patternType=\"solid\"><fgColor rgb=\"{}\"/><bgColor indexed=\"64\"/></patternFill></fill>",
            color.to_argb_hex()
        ));
    }
    content.push_str("\n    </fills>");

    content.push_str(&format!("\n    <borders count=\"{}\">", borders.len()));
    for border in &borders {
        content.push_str("\n        <border>");
        content.push_str(&border_edge_xml("left", border.left));
        content.push_str(&border_edge_xml("right", border.right));
        content.push_str(&border_edge_xml("top", border.top));
        content.push_str(&border_edge_xml("bottom", border.bottom));
        content.push_str("<diagonal/></border>");
    }
    content.push_str("\n    </borders>");

    content.push_str(
        r#"
    <cellStyleXfs count="1">
        <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
    </cellStyleXfs>"#,
    );

    content.push_str(&format!("\n    <cellXfs count=\"{}\">", xfs.len()));
    for xf in &xfs {
        let mut attrs = format!(
            "numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"",
            xf.num_fmt_id, xf.font_id, xf.fill_id, xf.border_id
        );
        if xf.num_fmt_id != 0 {
            attrs.push_str(" applyNumberFormat=\"1\"");
        }
        if xf.font_id != 0 {
            attrs.push_str(" applyFont=\"1\"");
        }
        if xf.fill_id != 0 {
            attrs.push_str(" applyFill=\"1\"");
        }
        if xf.border_id != 0 {
            attrs.push_str(" applyBorder=\"1\"");
        }
        match alignment_name(xf.align) {
            Some(name) => {
                attrs.push_str(" applyAlignment=\"1\"");
                content.push_str(&format!(
                    "\n        <xf {}><alignment horizontal=\"{}\"/></xf>",
                    attrs, name
                ));
            }
            None => {
                content.push_str(&format!("\n        <xf {}/>", attrs));
            }
        }
    }
    content.push_str("\n    </cellXfs>");

    content.push_str(
        r#"
    <cellStyles count="1">
        <cellStyle name="Normal" xfId="0" builtinId="0"/>
    </cellStyles>
</styleSheet>"#,
    );

    content
}

fn border_edge_xml(edge: &str, line: BorderLine) -> String {
    match border_line_name(line) {
        Some(name) => format!("<{} style=\"{}\"/>", edge, name),
        None => format!("<{}/>", edge),
    }
}

fn border_line_name(line: BorderLine) -> Option<&'static str> {
    match line {
        BorderLine::None => None,
        BorderLine::Thin => Some("thin"),
        BorderLine::Medium => Some("medium"),
        BorderLine::Thick => Some("thick"),
    }
}

fn alignment_name(align: HorizontalAlign) -> Option<&'static str> {
    match align {
        HorizontalAlign::General => None,
        HorizontalAlign::Left => Some("left"),
        HorizontalAlign::Center => Some("center"),
        HorizontalAlign::Right => Some("right"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetsmith_core::{CellValue, Row, Workbook};

    fn defaults() -> FormatDefaults {
        FormatDefaults::default()
    }

    #[test]
    fn test_resolve_plain_text_needs_no_style() {
        let cell = Cell::new(CellValue::text("x"));
        assert_eq!(resolve_cell_style(&cell, None, &defaults()), None);
    }

    #[test]
    fn test_resolve_derives_date_format() {
        let cell = Cell::new(CellValue::ymd(2025, 1, 15).unwrap());
        let resolved = resolve_cell_style(&cell, None, &defaults()).unwrap();
        assert_eq!(resolved.number_format.as_deref(), Some("yyyy-mm-dd"));
    }

    #[test]
    fn test_resolve_keeps_explicit_format() {
        let cell = Cell::styled(
            CellValue::decimal(1.5).unwrap(),
            Style::new().number_format("0.000"),
        );
        let resolved = resolve_cell_style(&cell, None, &defaults()).unwrap();
        assert_eq!(resolved.number_format.as_deref(), Some("0.000"));
    }

    #[test]
    fn test_resolve_extends_styled_cell_with_derived_format() {
        let cell = Cell::styled(CellValue::decimal(1.5).unwrap(), Style::new().bold(true));
        let resolved = resolve_cell_style(&cell, None, &defaults()).unwrap();
        assert!(resolved.bold);
        assert_eq!(resolved.number_format.as_deref(), Some("0.00"));
    }

    #[test]
    fn test_resolve_column_style_stays_on_column() {
        let column = ColumnSpec {
            width: None,
            style: Some(Style::new().number_format("0%")),
        };
        let cell = Cell::new(CellValue::decimal(0.5).unwrap());
        // The column's explicit format covers the cell; no cell-level style
        assert_eq!(resolve_cell_style(&cell, Some(&column), &defaults()), None);
    }

    #[test]
    fn test_style_table_dedup_across_rows() {
        let mut wb = Workbook::new();
        let sheet = wb.add_sheet("Data").unwrap();
        let header = Style::new().bold(true);
        for _ in 0..100 {
            let mut row = Row::new();
            row.push_styled(CellValue::text("x"), header.clone());
            sheet.append_row(row);
        }

        let table = build_style_table(&wb, &defaults());
        // default + the one shared style, regardless of row count
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_font_color_rendered_in_font_table() {
        let mut table = StyleTable::new();
        table.get_or_insert(&Style::new().bold(true).font_color(Color::RED));

        let xml = to_styles_xml(&table);
        assert!(xml.contains(r#"<font><b/><sz val="11"/><color rgb="FFFF0000"/><name val="Calibri"/></font>"#));
        assert!(xml.contains(r#"<fonts count="2">"#));
    }

    #[test]
    fn test_column_width_excluded_from_xf_key() {
        let mut wb = Workbook::new();
        let sheet = wb.add_sheet("Data").unwrap();
        sheet.set_column_style(0, Style::new().bold(true).column_width(25.0));
        let mut row = Row::new();
        row.push_styled(CellValue::text("x"), Style::new().bold(true));
        sheet.append_row(row);

        // same formatting modulo width dedups to one entry
        let table = build_style_table(&wb, &defaults());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_styles_xml_components() {
        let mut table = StyleTable::new();
        table.get_or_insert(
            &Style::new()
                .bold(true)
                .background(Color::YELLOW)
                .border(BorderLine::Thin)
                .horizontal_align(HorizontalAlign::Center),
        );
        table.get_or_insert(&Style::new().number_format("yyyy-mm-dd"));

        let xml = to_styles_xml(&table);
        assert!(xml.contains(r#"<numFmt numFmtId="164" formatCode="yyyy-mm-dd"/>"#));
        assert!(xml.contains("<b/>"));
        assert!(xml.contains(r#"<fgColor rgb="FFFFFF00"/>"#));
        assert!(xml.contains(r#"<left style="thin"/>"#));
        assert!(xml.contains(r#"<alignment horizontal="center"/>"#));
        assert!(xml.contains(r#"<cellXfs count="3">"#));
    }
}
