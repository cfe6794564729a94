//! Error types for the pdf2png library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Pdf2PngError`] — **Fatal**: the extraction cannot proceed at all
//!   (missing file, wrong extension, unparseable PDF, output directory
//!   could not be created). Returned as `Err(Pdf2PngError)` from the
//!   top-level entry points.
//!
//! * [`PageError`] — **Non-fatal**: a single page failed (render glitch,
//!   encode or write error) but the remaining pages are fine. Stored inside
//!   [`crate::extract::PageOutcome`] so callers can inspect partial
//!   success rather than losing the whole document to one bad page.
//!
//! The separation lets callers decide their own tolerance: abort on the first
//! page failure, log and continue, or collect all errors for a post-run report.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2png library.
///
/// Page-level failures use [`PageError`] and are stored in
/// [`crate::extract::PageOutcome`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Pdf2PngError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// The path exists but does not carry a `.pdf` extension.
    #[error("Not a PDF file (extension must be .pdf): '{path}'")]
    NotAPdf { path: PathBuf },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// pdfium could not open or parse the document.
    #[error("Failed to load PDF '{path}': {detail}")]
    LoadFailed { path: PathBuf, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// The output directory could not be created. Fatal for the run.
    #[error("Failed to create directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Install libpdfium and make sure it is on the loader path,\n\
or set PDFIUM_DYNAMIC_LIB_PATH to point at an existing copy."
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single page.
///
/// Stored in [`crate::extract::PageOutcome`] when a page fails.
/// The overall extraction continues with the next page.
#[derive(Debug, Clone, Error)]
pub enum PageError {
    /// Page rasterisation failed.
    #[error("Failed to render page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    /// PNG encoding of the rendered bitmap failed.
    #[error("Failed to encode page {page} as PNG: {detail}")]
    EncodeFailed { page: usize, detail: String },

    /// The encoded PNG could not be written to disk.
    #[error("Failed to save Page {page} as an image: {detail}")]
    WriteFailed { page: usize, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_failed_display() {
        let e = Pdf2PngError::OutputDirFailed {
            path: PathBuf::from("/nope/report-Images"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = e.to_string();
        assert!(msg.contains("report-Images"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
    }

    #[test]
    fn page_write_failed_display() {
        let e = PageError::WriteFailed {
            page: 3,
            detail: "disk full".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("Page 3"), "got: {msg}");
        assert!(msg.contains("disk full"), "got: {msg}");
    }

    #[test]
    fn load_failed_display() {
        let e = Pdf2PngError::LoadFailed {
            path: PathBuf::from("bad.pdf"),
            detail: "FormatError".into(),
        };
        assert!(e.to_string().contains("bad.pdf"));
        assert!(e.to_string().contains("FormatError"));
    }
}
