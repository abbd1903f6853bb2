//! Tests for extension-based saving through `WorkbookExt`

use sheetsmith::prelude::*;
use sheetsmith::{SaveError, XlsxError};

fn sample_workbook() -> Workbook {
    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Data").unwrap();
    sheet.append_values(["a", "b"]);
    sheet.append_values(["c", "d"]);
    wb
}

#[test]
fn test_save_xlsx_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    sample_workbook().save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_save_csv_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    sample_workbook().save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "a,b\r\nc,d\r\n");
}

#[test]
fn test_multi_sheet_csv_save_keeps_first_sheet() {
    let mut wb = sample_workbook();
    wb.add_sheet("Extra").unwrap().append_values(["dropped"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    wb.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "a,b\r\nc,d\r\n");
}

#[test]
fn test_extension_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.XLSX");

    sample_workbook().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let err = sample_workbook().save(&path).unwrap_err();
    assert!(matches!(err, SaveError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

#[test]
fn test_empty_workbook_cannot_be_saved() {
    let dir = tempfile::tempdir().unwrap();

    let err = Workbook::new().save(dir.path().join("out.xlsx")).unwrap_err();
    assert!(matches!(err, SaveError::Xlsx(XlsxError::EmptyWorkbook)));

    let err = Workbook::new().save(dir.path().join("out.csv")).unwrap_err();
    assert!(matches!(err, SaveError::Csv(_)));
}
