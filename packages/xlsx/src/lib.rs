#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spreadsheet serialization for extracted profile rows.
//!
//! Writes a single worksheet named [`SHEET_NAME`] with the columns
//! [`HEADERS`] and one line per [`Row`]. Values keep their native cell
//! type: text stays text, numbers are written as numbers and dates as
//! date-formatted serial numbers.
//!
//! The caller picks where the workbook goes through [`Destination`].

use std::path::{Path, PathBuf};

use chrono::Datelike as _;
use dossier_profile_models::{CellValue, Row};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};

/// Name of the only worksheet.
pub const SHEET_NAME: &str = "Output";

/// Column headers, in column order.
pub const HEADERS: [&str; 4] = ["#", "Key", "Value", "Comments"];

/// MIME type of the produced workbook.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Errors raised while producing a workbook.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The spreadsheet writer failed, including I/O failures on save.
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    /// More rows than a worksheet can hold.
    #[error("Too many rows for one worksheet: {0}")]
    TooManyRows(usize),

    /// A date outside the range spreadsheets can represent.
    #[error("Date out of spreadsheet range: {0}")]
    DateOutOfRange(chrono::NaiveDate),
}

/// Where a serialized workbook should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Save to a file, replacing it if present.
    Path(PathBuf),
    /// Keep the workbook in memory.
    Buffer,
}

/// A produced workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// The file the workbook was saved to.
    Path(PathBuf),
    /// The raw `.xlsx` bytes.
    Bytes(Vec<u8>),
}

/// Serializes `rows` to `destination`.
///
/// # Errors
///
/// Returns [`WriteError`] if the workbook cannot be built or saved.
pub fn write_rows(rows: &[Row], destination: &Destination) -> Result<Artifact, WriteError> {
    match destination {
        Destination::Path(path) => to_path(rows, path).map(Artifact::Path),
        Destination::Buffer => to_bytes(rows).map(Artifact::Bytes),
    }
}

/// Serializes `rows` into in-memory `.xlsx` bytes.
///
/// # Errors
///
/// Returns [`WriteError`] if the workbook cannot be built.
pub fn to_bytes(rows: &[Row]) -> Result<Vec<u8>, WriteError> {
    let mut workbook = build_workbook(rows)?;
    let bytes = workbook.save_to_buffer()?;

    log::debug!("Serialized {} row(s) into {} bytes", rows.len(), bytes.len());

    Ok(bytes)
}

/// Serializes `rows` and saves the workbook at `path`.
///
/// # Errors
///
/// Returns [`WriteError`] if the workbook cannot be built or the file
/// cannot be written.
pub fn to_path(rows: &[Row], path: &Path) -> Result<PathBuf, WriteError> {
    let mut workbook = build_workbook(rows)?;
    workbook.save(path)?;

    log::debug!("Saved {} row(s) to {}", rows.len(), path.display());

    Ok(path.to_path_buf())
}

fn build_workbook(rows: &[Row]) -> Result<Workbook, WriteError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold().set_border(rust_xlsxwriter::FormatBorder::Thin);
    let date = Format::new().set_num_format(DATE_FORMAT);

    for (col, title) in (0u16..).zip(HEADERS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }
    sheet.set_column_width(1, 40)?;
    sheet.set_column_width(2, 28)?;
    sheet.set_column_width(3, 80)?;

    for row in rows {
        let line = u32::try_from(row.index).map_err(|_| WriteError::TooManyRows(row.index))?;
        write_row(sheet, line, row, &date)?;
    }

    Ok(workbook)
}

/// Writes one data row at worksheet line `line` (the header is line 0).
#[allow(clippy::cast_precision_loss)]
fn write_row(sheet: &mut Worksheet, line: u32, row: &Row, date: &Format) -> Result<(), WriteError> {
    sheet.write_number(line, 0, f64::from(line))?;
    sheet.write_string(line, 1, &row.key)?;

    match &row.value {
        Some(CellValue::Text(text)) => {
            sheet.write_string(line, 2, text)?;
        }
        Some(CellValue::Integer(n)) => {
            sheet.write_number(line, 2, *n as f64)?;
        }
        Some(CellValue::Float(n)) => {
            sheet.write_number(line, 2, *n)?;
        }
        Some(CellValue::Date(d)) => {
            let serial = excel_date(*d)?;
            sheet.write_datetime_with_format(line, 2, &serial, date)?;
        }
        None => {}
    }

    if let Some(comment) = &row.comment {
        sheet.write_string(line, 3, comment)?;
    }

    Ok(())
}

fn excel_date(date: chrono::NaiveDate) -> Result<ExcelDateTime, WriteError> {
    let out_of_range = |_| WriteError::DateOutOfRange(date);
    let year = u16::try_from(date.year()).map_err(out_of_range)?;
    let month = u8::try_from(date.month()).map_err(out_of_range)?;
    let day = u8::try_from(date.day()).map_err(out_of_range)?;

    ExcelDateTime::from_ymd(year, month, day).map_err(|_| WriteError::DateOutOfRange(date))
}
