//! End-to-end tests for delimited-text output

use sheetsmith::prelude::*;
use sheetsmith::LineTerminator;

fn render(workbook: &Workbook, options: &CsvOptions) -> String {
    let mut buf = Vec::new();
    CsvWriter::write_workbook(workbook, &mut buf, options).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_report_scenario() {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Report").unwrap();
    sheet.append_values(["Name", "Amount", "Date"]);

    let mut row = Row::new();
    row.push(CellValue::text("Alice"));
    row.push(CellValue::decimal(12.5).unwrap());
    row.push(CellValue::ymd(2025, 1, 15).unwrap());
    sheet.append_row(row);

    assert_eq!(
        render(&wb, &CsvOptions::default()),
        "Name,Amount,Date\r\nAlice,12.5,2025-01-15\r\n"
    );
}

#[test]
fn test_escaped_fields_survive_a_parse() {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Data").unwrap();
    let fields = ["plain", "comma,inside", "quote \"inside\"", "line\nbreak"];
    sheet.append_values(fields);

    let output = render(&wb, &CsvOptions::default());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(output.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(records.len(), 1);
    let parsed: Vec<&str> = records[0].iter().collect();
    assert_eq!(parsed, fields);
}

#[test]
fn test_sparse_rows_keep_interior_gaps() {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Data").unwrap();

    let mut row = Row::new();
    row.set(0, CellValue::text("a")).unwrap();
    row.set(3, CellValue::text("b")).unwrap();
    sheet.append_row(row);
    // shorter row after a longer one: no trailing padding
    sheet.append_values(["c"]);

    let options = CsvOptions {
        line_terminator: LineTerminator::LF,
        ..CsvOptions::default()
    };
    assert_eq!(render(&wb, &options), "a,,,b\nc\n");
}

#[test]
fn test_styles_do_not_leak_into_output() {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Data").unwrap();
    let mut row = Row::new();
    row.push_styled(
        CellValue::text("styled"),
        Style::new().bold(true).background(Color::RED),
    );
    sheet.append_row(row);

    let options = CsvOptions {
        line_terminator: LineTerminator::LF,
        ..CsvOptions::default()
    };
    assert_eq!(render(&wb, &options), "styled\n");
}

#[test]
fn test_value_rendering() {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Data").unwrap();
    let mut row = Row::new();
    row.push(CellValue::integer(-7));
    row.push(CellValue::boolean(true));
    row.push(CellValue::ymd_hms(2025, 1, 15, 9, 30, 0).unwrap());
    row.push(CellValue::formula("=A1+B1"));
    sheet.append_row(row);

    let options = CsvOptions {
        line_terminator: LineTerminator::LF,
        ..CsvOptions::default()
    };
    assert_eq!(
        render(&wb, &options),
        "-7,TRUE,2025-01-15 09:30:00,=A1+B1\n"
    );
}
