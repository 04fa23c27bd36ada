#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF text extraction for narrative profile documents.
//!
//! Uses pure-Rust text extraction ([`pdf_extract`]) to turn a PDF into the
//! raw text of its pages. Each page's text is followed by a newline and
//! the pages are concatenated in order; whitespace normalization is left
//! to the extraction layer.
//!
//! A document that cannot be parsed at all yields a
//! [`DocumentReadError`]. There is no partial-document fallback.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Errors raised while reading a PDF into text.
#[derive(Debug, thiserror::Error)]
pub enum DocumentReadError {
    /// The file could not be read from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a PDF that text can be extracted from.
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// The input buffer was empty.
    #[error("PDF document is empty")]
    Empty,
}

/// Extracts the text of every page of an in-memory PDF.
///
/// # Errors
///
/// Returns [`DocumentReadError::Empty`] for an empty buffer and
/// [`DocumentReadError::Extraction`] if the bytes cannot be parsed.
pub fn read_pages_from_mem(bytes: &[u8]) -> Result<Vec<String>, DocumentReadError> {
    if bytes.is_empty() {
        return Err(DocumentReadError::Empty);
    }

    log::debug!("Reading {} bytes of PDF", bytes.len());

    // pdf-extract panics on some malformed inputs instead of returning an
    // error, so the panic is turned into an extraction error here.
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    let pages = match result {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            return Err(DocumentReadError::Extraction(format!(
                "failed to extract text from PDF: {e}"
            )));
        }
        Err(_) => {
            return Err(DocumentReadError::Extraction(
                "PDF parser aborted on malformed input".to_string(),
            ));
        }
    };

    log::debug!("Extracted text from {} page(s)", pages.len());

    Ok(pages)
}

/// Extracts the concatenated text of an in-memory PDF, one newline after
/// each page.
///
/// # Errors
///
/// See [`read_pages_from_mem`].
pub fn read_text_from_mem(bytes: &[u8]) -> Result<String, DocumentReadError> {
    let pages = read_pages_from_mem(bytes)?;
    Ok(join_pages(&pages))
}

/// Reads a PDF file and extracts its concatenated text.
///
/// # Errors
///
/// Returns [`DocumentReadError::Io`] if the file cannot be read, otherwise
/// see [`read_pages_from_mem`].
pub fn read_text_from_path(path: &Path) -> Result<String, DocumentReadError> {
    let bytes = std::fs::read(path)?;

    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    read_text_from_mem(&bytes)
}

/// Joins page texts, terminating each page with a newline.
#[must_use]
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.as_ref().len() + 1).sum());
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text
}

/// Returns `true` if the file name carries a `.pdf` extension
/// (case-insensitive).
#[must_use]
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
