//! PDF rasterisation: render pages to `DynamicImage` via pdfium.
//!
//! ## Why a scale factor instead of a pixel size?
//!
//! PDF page geometry is expressed in points (1/72 inch), so a target DPI
//! maps directly to a render scale of `dpi / 72`. Rendering by scale keeps
//! every page at the same physical resolution regardless of its dimensions,
//! which is exactly what a print-quality export wants. At the default
//! 500 DPI a US-Letter page comes out around 4250 × 5500 px.

use crate::error::{PageError, Pdf2PngError};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::debug;

/// Bind to a pdfium shared library.
///
/// Tries a copy next to the executable's working directory first, then the
/// system loader path. Binding happens once per run; the returned [`Pdfium`]
/// owns the binding and every document opened through it.
pub fn bind_pdfium() -> Result<Pdfium, Pdf2PngError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| Pdf2PngError::PdfiumBindingFailed(format!("{e:?}")))
}

/// Open and parse a PDF document.
///
/// The returned handle borrows `pdfium` and is released when dropped,
/// on every exit path.
pub fn open_document<'a>(
    pdfium: &'a Pdfium,
    path: &Path,
) -> Result<PdfDocument<'a>, Pdf2PngError> {
    let document =
        pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Pdf2PngError::LoadFailed {
                path: path.to_path_buf(),
                detail: format!("{e:?}"),
            })?;

    debug!(
        "Loaded '{}': {} pages",
        path.display(),
        document.pages().len()
    );
    Ok(document)
}

/// Number of pages in an opened document.
pub fn page_count(document: &PdfDocument<'_>) -> usize {
    document.pages().len() as usize
}

/// Rasterise one page (0-based index) at the given DPI.
pub fn render_page(
    document: &PdfDocument<'_>,
    index: usize,
    dpi: u32,
) -> Result<DynamicImage, PageError> {
    let page_num = index + 1;

    let page = document
        .pages()
        .get(index as u16)
        .map_err(|e| PageError::RenderFailed {
            page: page_num,
            detail: format!("{e:?}"),
        })?;

    // 72 points per inch.
    let render_config = PdfRenderConfig::new().scale_page_by_factor(dpi as f32 / 72.0);

    let bitmap = page
        .render_with_config(&render_config)
        .map_err(|e| PageError::RenderFailed {
            page: page_num,
            detail: format!("{e:?}"),
        })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered page {} → {}x{} px",
        page_num,
        image.width(),
        image.height()
    );

    Ok(image)
}
