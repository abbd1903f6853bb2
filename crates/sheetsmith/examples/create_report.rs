//! Example: Create a styled report as both xlsx and csv

use sheetsmith::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_sheet("Report")?;

    // Header row
    let header = Style::new()
        .bold(true)
        .font_color(Color::WHITE)
        .background(Color::GREY)
        .horizontal_align(HorizontalAlign::Center);
    let mut row = Row::new();
    row.push_styled(CellValue::text("Name"), header.clone());
    row.push_styled(CellValue::text("Amount"), header.clone());
    row.push_styled(CellValue::text("Date"), header);
    sheet.append_row(row);

    // Data rows
    for (name, amount, day) in [("Alice", 12.5, 15), ("Bob", 9.75, 16), ("Carol", 20.0, 17)] {
        let mut row = Row::new();
        row.push(CellValue::text(name));
        row.push(CellValue::decimal(amount)?);
        row.push(CellValue::ymd(2025, 1, day)?);
        sheet.append_row(row);
    }

    // Total row
    let mut row = Row::new();
    row.push_styled(CellValue::text("Total"), Style::new().bold(true));
    row.push(CellValue::formula("=SUM(B2:B4)"));
    sheet.append_row(row);

    sheet.set_column_width(0, 18.0)?;

    // Save both formats
    workbook.save("/tmp/report.xlsx")?;
    workbook.save("/tmp/report.csv")?;
    println!("Created /tmp/report.xlsx and /tmp/report.csv");

    Ok(())
}
