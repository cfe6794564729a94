//! Extraction entry points: orchestrate validate → load → render → save.
//!
//! The interactive binary drives the granular functions here one step at a
//! time so it can interleave its prompt loops; library callers use the
//! one-shot [`extract`]. Either way the per-page policy is the same: a page
//! failure is recorded and reported, and the loop moves on to the next page.
//! Only the output-directory creation is fatal.

use crate::config::ExtractConfig;
use crate::error::{PageError, Pdf2PngError};
use crate::pipeline::{encode, input, render};
use crate::progress::ExtractProgress;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Outcome of one page: the file it was (or would have been) written to,
/// and the error if it failed.
#[derive(Debug)]
pub struct PageOutcome {
    /// 1-based page number as shown to the user.
    pub page_num: usize,
    /// File name (not full path) inside the output directory.
    pub file_name: String,
    /// `None` when the page was rendered, encoded, and written.
    pub error: Option<PageError>,
}

/// Summary of a full extraction run.
#[derive(Debug)]
pub struct ExtractSummary {
    /// Page count of the source document.
    pub total_pages: usize,
    /// Directory the images were written into.
    pub output_dir: PathBuf,
    /// Per-page outcomes, in ascending page order.
    pub pages: Vec<PageOutcome>,
}

impl ExtractSummary {
    /// Number of pages written successfully.
    pub fn saved(&self) -> usize {
        self.pages.iter().filter(|p| p.error.is_none()).count()
    }

    /// Number of pages that failed.
    pub fn failed(&self) -> usize {
        self.pages.iter().filter(|p| p.error.is_some()).count()
    }
}

/// Create the output directory, including intermediate directories.
///
/// This is the one fatal, non-recoverable error path of a run: without the
/// directory no page can be written, so the caller must stop.
pub fn create_output_dir(dir: &Path) -> Result<(), Pdf2PngError> {
    std::fs::create_dir_all(dir).map_err(|e| Pdf2PngError::OutputDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Run the page loop over an already-opened document.
///
/// Pages are processed strictly in ascending order, one at a time. Each
/// page's bitmap lives only for its own iteration. Per-page failures are
/// recorded in the returned summary and reported through `progress`; they
/// never abort the loop.
pub fn extract_pages(
    document: &PdfDocument<'_>,
    source: &Path,
    output_dir: &Path,
    config: &ExtractConfig,
    progress: &dyn ExtractProgress,
) -> ExtractSummary {
    let start = Instant::now();
    let stem = input::source_stem(source);
    let total_pages = render::page_count(document);
    progress.on_start(total_pages);

    let mut pages = Vec::with_capacity(total_pages);

    for index in 0..total_pages {
        let page_num = index + 1;
        let file_name = input::page_file_name(&stem, page_num);
        let dest = output_dir.join(&file_name);

        let error = match save_page(document, index, config.dpi, &dest) {
            Ok(()) => {
                progress.on_page_saved(page_num, &file_name);
                None
            }
            Err(e) => {
                warn!("Page {page_num} failed: {e}");
                progress.on_page_error(page_num, &e.to_string());
                Some(e)
            }
        };

        pages.push(PageOutcome {
            page_num,
            file_name,
            error,
        });
    }

    let summary = ExtractSummary {
        total_pages,
        output_dir: output_dir.to_path_buf(),
        pages,
    };

    info!(
        "Extracted {}/{} pages to '{}' in {}ms",
        summary.saved(),
        total_pages,
        output_dir.display(),
        start.elapsed().as_millis()
    );
    progress.on_complete(summary.saved(), total_pages);
    summary
}

/// Render, encode, and write one page. The bitmap is dropped on return.
fn save_page(
    document: &PdfDocument<'_>,
    index: usize,
    dpi: u32,
    dest: &Path,
) -> Result<(), PageError> {
    let page_num = index + 1;
    let image = render::render_page(document, index, dpi)?;

    let bytes = encode::encode_png(&image).map_err(|e| PageError::EncodeFailed {
        page: page_num,
        detail: e.to_string(),
    })?;

    // Direct write, no temp-file staging; re-runs overwrite silently.
    std::fs::write(dest, &bytes).map_err(|e| PageError::WriteFailed {
        page: page_num,
        detail: e.to_string(),
    })
}

/// One-shot extraction: validate the path, open the document, create the
/// output directory beside the source, and run the page loop.
///
/// # Errors
/// Returns `Err(Pdf2PngError)` only for fatal conditions (invalid path,
/// unparseable document, output directory creation failure). Per-page
/// failures are recorded in the returned [`ExtractSummary`].
pub fn extract(
    path_str: &str,
    config: &ExtractConfig,
    progress: &dyn ExtractProgress,
) -> Result<ExtractSummary, Pdf2PngError> {
    let source = input::validate_pdf_path(path_str)?;

    let pdfium = render::bind_pdfium()?;
    let document = render::open_document(&pdfium, &source)?;

    let output_dir = input::output_dir_for(&source);
    create_output_dir(&output_dir)?;

    Ok(extract_pages(
        &document,
        &source,
        &output_dir,
        config,
        progress,
    ))
    // `document` drops here, releasing the pdfium handle on every path.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_output_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report-Images");
        create_output_dir(&target).unwrap();
        create_output_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn create_output_dir_makes_intermediates() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c-Images");
        create_output_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn create_output_dir_fails_on_file_collision() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report-Images");
        std::fs::write(&target, b"a plain file").unwrap();
        let err = create_output_dir(&target).unwrap_err();
        assert!(matches!(err, Pdf2PngError::OutputDirFailed { .. }));
    }

    #[test]
    fn summary_counts() {
        let summary = ExtractSummary {
            total_pages: 3,
            output_dir: PathBuf::from("x-Images"),
            pages: vec![
                PageOutcome {
                    page_num: 1,
                    file_name: "x_Page1.png".into(),
                    error: None,
                },
                PageOutcome {
                    page_num: 2,
                    file_name: "x_Page2.png".into(),
                    error: Some(PageError::RenderFailed {
                        page: 2,
                        detail: "boom".into(),
                    }),
                },
                PageOutcome {
                    page_num: 3,
                    file_name: "x_Page3.png".into(),
                    error: None,
                },
            ],
        };
        assert_eq!(summary.saved(), 2);
        assert_eq!(summary.failed(), 1);
    }
}
