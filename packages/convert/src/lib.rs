#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! End-to-end PDF to spreadsheet conversion for narrative profiles.
//!
//! Composes the three stages: [`dossier_pdf`] reads the document text,
//! [`dossier_profile`] extracts rows, and [`dossier_xlsx`] writes them.
//! Each call is self-contained and owns its rows, so conversions may run
//! on any number of threads at once.

use std::path::{Path, PathBuf};

use dossier_pdf::DocumentReadError;
use dossier_profile::extract_all;
use dossier_profile_models::Row;
use dossier_xlsx::{Artifact, Destination, WriteError};

/// File name used when the caller does not choose one.
pub const DEFAULT_OUTPUT: &str = "Output.xlsx";

/// Errors raised by a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input document could not be read.
    #[error(transparent)]
    Read(#[from] DocumentReadError),

    /// The spreadsheet could not be produced.
    #[error(transparent)]
    Write(#[from] WriteError),

    /// The input file does not carry a `.pdf` extension.
    #[error("Not a PDF file: {0}")]
    NotPdf(PathBuf),
}

/// The result of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Rows written to the spreadsheet.
    pub rows: Vec<Row>,
    /// Where the spreadsheet ended up.
    pub artifact: Artifact,
}

/// Extracts rows from `raw_text` and serializes them to `destination`.
///
/// # Errors
///
/// Returns [`WriteError`] if the spreadsheet cannot be produced.
pub fn save_to_table(raw_text: &str, destination: &Destination) -> Result<Artifact, WriteError> {
    let rows = extract_all(raw_text);
    dossier_xlsx::write_rows(&rows, destination)
}

/// Reads a PDF file and extracts its rows.
///
/// # Errors
///
/// Returns [`ConvertError::NotPdf`] for files without a `.pdf` extension
/// and [`ConvertError::Read`] if the document cannot be read.
pub fn extract_file(input: &Path) -> Result<Vec<Row>, ConvertError> {
    if !dossier_pdf::has_pdf_extension(input) {
        return Err(ConvertError::NotPdf(input.to_path_buf()));
    }

    let text = dossier_pdf::read_text_from_path(input)?;
    Ok(extract_all(&text))
}

/// Extracts rows from in-memory PDF bytes.
///
/// # Errors
///
/// Returns [`ConvertError::Read`] if the document cannot be read.
pub fn extract_bytes(pdf: &[u8]) -> Result<Vec<Row>, ConvertError> {
    let text = dossier_pdf::read_text_from_mem(pdf)?;
    Ok(extract_all(&text))
}

/// Converts a PDF file into a spreadsheet saved at `output`.
///
/// # Errors
///
/// Returns [`ConvertError`] if the input cannot be read or the output
/// cannot be written.
pub fn convert_file(input: &Path, output: &Path) -> Result<Conversion, ConvertError> {
    let rows = extract_file(input)?;
    let artifact = dossier_xlsx::write_rows(&rows, &Destination::Path(output.to_path_buf()))?;

    log::info!(
        "Converted {} into {} ({} row(s))",
        input.display(),
        output.display(),
        rows.len()
    );

    Ok(Conversion { rows, artifact })
}

/// Converts in-memory PDF bytes into in-memory spreadsheet bytes.
///
/// # Errors
///
/// Returns [`ConvertError`] if the input cannot be read or the workbook
/// cannot be built.
pub fn convert_bytes(pdf: &[u8]) -> Result<(Vec<Row>, Vec<u8>), ConvertError> {
    let rows = extract_bytes(pdf)?;
    let bytes = dossier_xlsx::to_bytes(&rows)?;

    log::info!(
        "Converted {} byte PDF into {} byte spreadsheet ({} row(s))",
        pdf.len(),
        bytes.len(),
        rows.len()
    );

    Ok((rows, bytes))
}
