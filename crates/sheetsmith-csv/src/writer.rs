//! Delimited-text writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvOptions, LineTerminator};
use sheetsmith_core::{Sheet, Workbook};

/// Delimited-text file writer
///
/// A stateless single-pass transform: each call walks the sheet once and
/// writes directly to the sink. The model is never mutated, so writing
/// the same sheet twice produces byte-identical output.
pub struct CsvWriter;

impl CsvWriter {
    /// Write a sheet to a file path
    pub fn write_file<P: AsRef<Path>>(
        sheet: &Sheet,
        path: P,
        options: &CsvOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, file, options)
    }

    /// Write the first sheet of a workbook to a file path
    pub fn write_workbook_file<P: AsRef<Path>>(
        workbook: &Workbook,
        path: P,
        options: &CsvOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write_workbook(workbook, file, options)
    }

    /// Write the first sheet of a workbook
    ///
    /// Delimited text has no notion of multiple sheets; any sheet past the
    /// first is skipped with a warning. An empty workbook is an error.
    pub fn write_workbook<W: Write>(
        workbook: &Workbook,
        writer: W,
        options: &CsvOptions,
    ) -> CsvResult<()> {
        let sheet = workbook.first_sheet().ok_or(CsvError::EmptyWorkbook)?;
        if workbook.sheet_count() > 1 {
            log::warn!(
                "delimited-text export uses only the first sheet; skipping {} other sheet(s)",
                workbook.sheet_count() - 1
            );
        }
        Self::write(sheet, writer, options)
    }

    /// Write a sheet to a writer
    pub fn write<W: Write>(sheet: &Sheet, writer: W, options: &CsvOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        for (_row_idx, row) in sheet.iter_rows() {
            let record = match row.max_col() {
                // Rectangular up to the row's own max column: interior gaps
                // become empty fields, trailing columns are not padded.
                Some(max_col) => (0..=max_col)
                    .map(|col| {
                        row.cell(col)
                            .map(|c| c.value.render_text())
                            .unwrap_or_default()
                    })
                    .collect::<Vec<_>>(),
                None => Vec::new(),
            };

            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
