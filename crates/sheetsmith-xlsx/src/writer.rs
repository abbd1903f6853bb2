//! XLSX document writer

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use quick_xml::escape::escape;
use sheetsmith_core::{CellValue, Sheet, StyleTable, Workbook};

use crate::container::{Container, ZipContainer};
use crate::error::{XlsxError, XlsxResult};
use crate::options::XlsxOptions;
use crate::serial::{render_serial, to_serial};
use crate::shared_strings::SharedStrings;
use crate::styles::{build_style_table, resolve_cell_style, to_styles_xml, xf_key};

/// Writes a workbook as an XLSX container
///
/// The writer is stateless between calls; each write walks the model
/// twice. The first pass validates capacity and builds the deduplicated
/// style table and shared-string counts, the second emits the XML parts.
/// The model is only read, never mutated, so one workbook can back
/// multiple writes.
///
/// ```rust,no_run
/// use sheetsmith_core::Workbook;
/// use sheetsmith_xlsx::XlsxWriter;
///
/// let mut workbook = Workbook::new();
/// workbook.add_sheet("Report")?.append_values(["a", "b"]);
/// XlsxWriter::new().write_file(&workbook, "report.xlsx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct XlsxWriter {
    options: XlsxOptions,
}

impl XlsxWriter {
    /// Create a writer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with explicit options
    pub fn with_options(options: XlsxOptions) -> Self {
        Self { options }
    }

    /// Write the workbook to a file at the given path
    pub fn write_file<P: AsRef<Path>>(&self, workbook: &Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        self.write(workbook, BufWriter::new(file))
    }

    /// Write the workbook to any seekable sink as a ZIP archive
    pub fn write<W: Write + Seek>(&self, workbook: &Workbook, writer: W) -> XlsxResult<()> {
        let mut container = ZipContainer::new(writer);
        self.write_container(workbook, &mut container)?;
        container.finish()?;
        Ok(())
    }

    /// Write the workbook's logical parts into a container
    ///
    /// This is the whole writer; `write` merely wraps it in ZIP
    /// packaging. Tests pass a [`crate::MemContainer`] here to inspect
    /// parts directly.
    pub fn write_container<C: Container>(
        &self,
        workbook: &Workbook,
        container: &mut C,
    ) -> XlsxResult<()> {
        if workbook.is_empty() {
            return Err(XlsxError::EmptyWorkbook);
        }
        self.validate(workbook)?;

        let styles = build_style_table(workbook, &self.options.formats);
        let mut strings = SharedStrings::collect(workbook, self.options.shared_string_threshold);
        let has_shared = strings.any_pooled();
        let sheet_count = workbook.sheet_count();

        container.put_part(
            "[Content_Types].xml",
            content_types_xml(sheet_count, has_shared).as_bytes(),
        )?;
        container.put_part("_rels/.rels", ROOT_RELS.as_bytes())?;
        container.put_part("xl/workbook.xml", workbook_xml(workbook).as_bytes())?;
        container.put_part(
            "xl/_rels/workbook.xml.rels",
            workbook_rels_xml(sheet_count, has_shared).as_bytes(),
        )?;
        container.put_part("xl/styles.xml", to_styles_xml(&styles).as_bytes())?;

        for (i, sheet) in workbook.sheets().enumerate() {
            let xml = self.sheet_xml(sheet, &styles, &mut strings);
            container.put_part(&format!("xl/worksheets/sheet{}.xml", i + 1), xml.as_bytes())?;
        }

        // Pool indices are assigned during sheet emission, so this part
        // must come last.
        if has_shared {
            container.put_part("xl/sharedStrings.xml", strings.to_xml().as_bytes())?;
        }

        log::debug!(
            "wrote {} sheet(s), {} style(s), {} shared string(s)",
            sheet_count,
            styles.len(),
            strings.unique_count()
        );
        Ok(())
    }

    /// Reject anything the format cannot represent before emitting parts
    fn validate(&self, workbook: &Workbook) -> XlsxResult<()> {
        let max_rows = self.options.row_limit();
        let max_cols = self.options.col_limit();
        for sheet in workbook.sheets() {
            for (row_idx, row) in sheet.iter_rows() {
                if row_idx >= max_rows {
                    return Err(XlsxError::CapacityExceeded {
                        sheet: sheet.name().to_string(),
                        row: row_idx,
                        col: 0,
                        max_rows,
                        max_cols,
                    });
                }
                if let Some(col) = row.max_col() {
                    if col >= max_cols {
                        return Err(XlsxError::CapacityExceeded {
                            sheet: sheet.name().to_string(),
                            row: row_idx,
                            col,
                            max_rows,
                            max_cols,
                        });
                    }
                }
                for (col, cell) in row.iter() {
                    if let CellValue::DateTime(dt) = &cell.value {
                        if !crate::serial::in_range(dt) {
                            return Err(XlsxError::DateOutOfRange {
                                sheet: sheet.name().to_string(),
                                row: row_idx,
                                col,
                                date: dt.render_text(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn sheet_xml(&self, sheet: &Sheet, styles: &StyleTable, strings: &mut SharedStrings) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        let mut cols = String::new();
        for (col, spec) in sheet.iter_columns() {
            let width = spec
                .width
                .or_else(|| spec.style.as_ref().and_then(|s| s.column_width));
            let style_idx = spec
                .style
                .as_ref()
                .and_then(|s| styles.index_of(&xf_key(s)))
                .filter(|&idx| idx != 0);
            if width.is_none() && style_idx.is_none() {
                continue;
            }

            let mut attrs = format!("min=\"{n}\" max=\"{n}\"", n = col as u32 + 1);
            match width {
                Some(w) => attrs.push_str(&format!(" width=\"{}\" customWidth=\"1\"", w)),
                // the element requires a width even when only styling
                None => attrs.push_str(" width=\"8.43\""),
            }
            if let Some(idx) = style_idx {
                attrs.push_str(&format!(" style=\"{}\"", idx));
            }
            cols.push_str(&format!("\n        <col {}/>", attrs));
        }
        if !cols.is_empty() {
            content.push_str("\n    <cols>");
            content.push_str(&cols);
            content.push_str("\n    </cols>");
        }

        content.push_str("\n    <sheetData>");
        for (row_idx, row) in sheet.iter_rows() {
            if row.is_empty() {
                continue;
            }
            content.push_str(&format!("\n        <row r=\"{}\">", row_idx + 1));
            for (col, cell) in row.iter() {
                let style_idx = resolve_cell_style(cell, sheet.column(col), &self.options.formats)
                    .and_then(|s| styles.index_of(&s));
                content.push_str(&cell_xml(
                    &cell.value,
                    &cell_ref(row_idx, col),
                    style_idx,
                    strings,
                ));
            }
            content.push_str("</row>");
        }
        content.push_str("\n    </sheetData>\n</worksheet>");
        content
    }
}

fn cell_xml(
    value: &CellValue,
    cell_ref: &str,
    style_idx: Option<u32>,
    strings: &mut SharedStrings,
) -> String {
    let style_attr = match style_idx {
        Some(idx) if idx != 0 => format!(" s=\"{}\"", idx),
        _ => String::new(),
    };

    match value {
        CellValue::Empty => {
            // Bare empty cells carry no information; only styled ones
            // are worth an element.
            if style_attr.is_empty() {
                String::new()
            } else {
                format!("<c r=\"{}\"{}/>", cell_ref, style_attr)
            }
        }
        CellValue::Text(s) => match strings.intern(s) {
            Some(idx) => format!(
                "<c r=\"{}\"{} t=\"s\"><v>{}</v></c>",
                cell_ref, style_attr, idx
            ),
            None => {
                let space = if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace)
                {
                    " xml:space=\"preserve\""
                } else {
                    ""
                };
                format!(
                    "<c r=\"{}\"{} t=\"inlineStr\"><is><t{}>{}</t></is></c>",
                    cell_ref,
                    style_attr,
                    space,
                    escape(s.as_str())
                )
            }
        },
        CellValue::Integer(n) => format!("<c r=\"{}\"{}><v>{}</v></c>", cell_ref, style_attr, n),
        CellValue::Decimal(n) => format!("<c r=\"{}\"{}><v>{}</v></c>", cell_ref, style_attr, n),
        CellValue::Boolean(b) => format!(
            "<c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
            cell_ref,
            style_attr,
            if *b { 1 } else { 0 }
        ),
        CellValue::DateTime(dt) => format!(
            "<c r=\"{}\"{}><v>{}</v></c>",
            cell_ref,
            style_attr,
            render_serial(to_serial(dt))
        ),
        CellValue::Formula(expr) => {
            let expr = expr.strip_prefix('=').unwrap_or(expr);
            format!(
                "<c r=\"{}\"{}><f>{}</f></c>",
                cell_ref,
                style_attr,
                escape(expr)
            )
        }
    }
}

/// Convert a 0-based column index to its letter form (0 -> "A", 27 -> "AB")
fn col_letters(col: u16) -> String {
    let mut n = col as u32 + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push(b'A' + rem);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).expect("ASCII letters")
}

/// A1-style reference for a 0-based (row, col) position
fn cell_ref(row: u32, col: u16) -> String {
    format!("{}{}", col_letters(col), row + 1)
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

fn content_types_xml(sheet_count: usize, has_shared: bool) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
    );
    for i in 1..=sheet_count {
        content.push_str(&format!(
            "\n    <Override PartName=\"/xl/worksheets/sheet{}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>",
            i
        ));
    }
    if has_shared {
        content.push_str(
            "\n    <Override PartName=\"/xl/sharedStrings.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml\"/>",
        );
    }
    content.push_str("\n</Types>");
    content
}

fn workbook_xml(workbook: &Workbook) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
    );
    for (i, sheet) in workbook.sheets().enumerate() {
        content.push_str(&format!(
            "\n        <sheet name=\"{}\" sheetId=\"{}\" r:id=\"rId{}\"/>",
            escape(sheet.name()),
            i + 1,
            i + 1
        ));
    }
    content.push_str("\n    </sheets>\n</workbook>");
    content
}

fn workbook_rels_xml(sheet_count: usize, has_shared: bool) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for i in 1..=sheet_count {
        content.push_str(&format!(
            "\n    <Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet{}.xml\"/>",
            i, i
        ));
    }
    content.push_str(&format!(
        "\n    <Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>",
        sheet_count + 1
    ));
    if has_shared {
        content.push_str(&format!(
            "\n    <Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings\" Target=\"sharedStrings.xml\"/>",
            sheet_count + 2
        ));
    }
    content.push_str("\n</Relationships>");
    content
}
