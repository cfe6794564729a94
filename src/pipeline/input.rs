//! Input resolution: path validation and output naming rules.
//!
//! ## The first-dot rule
//!
//! The output directory is derived from the *whole source path string*: the
//! text before the FIRST `.` character, plus the literal suffix `-Images`.
//! For `report.pdf` that gives `report-Images`; for `v1.2.final.pdf` it
//! gives `v1-Images`. The per-page file stem, by contrast, uses the usual
//! last-dot rule (`Path::file_stem`), so the same source yields files named
//! `v1.2.final_Page1.png` inside `v1-Images/`. Both rules are load-bearing
//! compatibility behaviour and must not be "fixed" independently.

use crate::error::Pdf2PngError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate a user-supplied path: it must exist and end in `.pdf`
/// (compared case-insensitively).
///
/// Returns the path unchanged on success so callers can thread it through.
pub fn validate_pdf_path(path_str: &str) -> Result<PathBuf, Pdf2PngError> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(Pdf2PngError::FileNotFound { path });
    }

    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(Pdf2PngError::NotAPdf { path });
    }

    debug!("Validated PDF path: {}", path.display());
    Ok(path)
}

/// Derive the output directory for a source path: everything before the
/// first `.` in the full path string, plus `-Images`.
pub fn output_dir_for(source: &Path) -> PathBuf {
    let s = source.to_string_lossy();
    let prefix = s.split('.').next().unwrap_or("");
    PathBuf::from(format!("{prefix}-Images"))
}

/// File stem of the source (last-dot rule), used to name each page image.
pub fn source_stem(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Output file name for a 1-based page number: `{stem}_Page{N}.png`.
pub fn page_file_name(stem: &str, page_num: usize) -> String {
    format!("{stem}_Page{page_num}.png")
}
