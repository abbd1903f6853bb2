//! End-to-end tests for XLSX output (build -> write -> unzip -> verify)

use std::io::{Cursor, Read};

use sheetsmith::prelude::*;
use sheetsmith::XlsxError;

/// Unzip one part of a written archive as UTF-8 text
fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn write_to_vec(workbook: &Workbook) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    XlsxWriter::new().write(workbook, &mut buf).unwrap();
    buf.into_inner()
}

fn report_workbook() -> Workbook {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Report").unwrap();

    let header = Style::new().bold(true).background(Color::GREY);
    let mut row = Row::new();
    row.push_styled(CellValue::text("Name"), header.clone());
    row.push_styled(CellValue::text("Amount"), header.clone());
    row.push_styled(CellValue::text("Date"), header);
    sheet.append_row(row);

    let mut row = Row::new();
    row.push(CellValue::text("Alice"));
    row.push(CellValue::decimal(12.5).unwrap());
    row.push(CellValue::ymd(2025, 1, 15).unwrap());
    sheet.append_row(row);

    wb
}

#[test]
fn test_archive_contains_required_parts() {
    let bytes = write_to_vec(&report_workbook());

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();

    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/styles.xml",
        "xl/worksheets/sheet1.xml",
    ] {
        assert!(names.iter().any(|n| n == required), "missing {}", required);
    }
}

#[test]
fn test_report_cell_values() {
    let bytes = write_to_vec(&report_workbook());
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("Alice"));
    assert!(sheet.contains("<v>12.5</v>"));
    // 2025-01-15 as a 1900-system serial
    assert!(sheet.contains("<v>45672</v>"));

    let workbook_xml = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook_xml.contains(r#"name="Report""#));
}

#[test]
fn test_shared_header_style_is_one_entry() {
    let bytes = write_to_vec(&report_workbook());
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    // all three header cells reference the same style index
    assert!(sheet.contains(r#"<c r="A1" s="1""#));
    assert!(sheet.contains(r#"<c r="B1" s="1""#));
    assert!(sheet.contains(r#"<c r="C1" s="1""#));

    let styles = read_part(&bytes, "xl/styles.xml");
    // default + header + derived decimal + derived date
    assert!(styles.contains(r#"<cellXfs count="4">"#));
}

#[test]
fn test_many_cells_one_style_entry() {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Data").unwrap();
    let accent = Style::new().italic(true).background(Color::YELLOW);
    for _ in 0..500 {
        let mut row = Row::new();
        row.push_styled(CellValue::text("x"), accent.clone());
        sheet.append_row(row);
    }

    let bytes = write_to_vec(&wb);
    let styles = read_part(&bytes, "xl/styles.xml");
    assert!(styles.contains(r#"<cellXfs count="2">"#));
}

#[test]
fn test_repeated_text_lands_in_shared_strings() {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Data").unwrap();
    for _ in 0..3 {
        sheet.append_values(["repeated"]);
    }

    let bytes = write_to_vec(&wb);
    let sst = read_part(&bytes, "xl/sharedStrings.xml");
    assert!(sst.contains(r#"count="3" uniqueCount="1""#));
    assert!(sst.contains("<si><t>repeated</t></si>"));

    let sheet_xml = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet_xml.contains(r#"t="s"><v>0</v>"#));
    assert!(!sheet_xml.contains("inlineStr"));
}

#[test]
fn test_xml_entities_in_text_and_sheet_names() {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("P&L").unwrap();
    sheet.append_values(["a<b", "c&d", "\"quoted\""]);

    let bytes = write_to_vec(&wb);
    let workbook_xml = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook_xml.contains("P&amp;L"));

    let sheet_xml = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet_xml.contains("a&lt;b"));
    assert!(sheet_xml.contains("c&amp;d"));
}

#[test]
fn test_writing_twice_is_byte_identical() {
    let wb = report_workbook();
    assert_eq!(write_to_vec(&wb), write_to_vec(&wb));
}

#[test]
fn test_empty_workbook_rejected() {
    let wb = Workbook::new();
    let mut buf = Cursor::new(Vec::new());
    let err = XlsxWriter::new().write(&wb, &mut buf).unwrap_err();
    assert!(matches!(err, XlsxError::EmptyWorkbook));
}

#[test]
fn test_row_ceiling_is_a_boundary() {
    let ceiling = 100u32;
    let options = XlsxOptions {
        max_rows: ceiling,
        ..XlsxOptions::default()
    };

    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Data").unwrap();
    sheet
        .set_cell(ceiling - 1, 0, CellValue::integer(1))
        .unwrap();
    let mut buf = Cursor::new(Vec::new());
    assert!(XlsxWriter::with_options(options.clone())
        .write(&wb, &mut buf)
        .is_ok());

    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Data").unwrap();
    sheet.set_cell(ceiling, 0, CellValue::integer(1)).unwrap();
    let mut buf = Cursor::new(Vec::new());
    let err = XlsxWriter::with_options(options)
        .write(&wb, &mut buf)
        .unwrap_err();
    assert!(matches!(
        err,
        XlsxError::CapacityExceeded { row: 100, .. }
    ));
}
