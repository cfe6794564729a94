//! # pdf2png
//!
//! Extract every page of a PDF document as a separate PNG image.
//!
//! ## Why this crate?
//!
//! Sharing or archiving individual PDF pages as images is a chore: most
//! tools want flags, page ranges, and output templates. `pdf2png` is the
//! opposite — an interactive, single-run utility. It asks for a file path,
//! renders each page at print quality (500 DPI), and drops the images into
//! a folder named after the source, right next to it.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input   validate the path, derive the output folder and names
//!  ├─ 2. Render  rasterise each page at 500 DPI via pdfium
//!  ├─ 3. Encode  page bitmap → PNG bytes
//!  └─ 4. Save    one `{name}_Page{N}.png` per page, failures isolated
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2png::{extract, ExtractConfig, NoProgress};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = extract("document.pdf", &ExtractConfig::default(), &NoProgress)?;
//!     eprintln!("{}/{} pages saved to {}",
//!         summary.saved(),
//!         summary.total_pages,
//!         summary.output_dir.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Output naming
//!
//! For a source `report.pdf` the images land in `report-Images/` as
//! `report_Page1.png` … `report_PageN.png`. The folder name takes the text
//! before the *first* dot of the full path; the file stem takes the text
//! before the *last* dot. See [`pipeline::input`] for why both rules exist.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod console;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractConfig, ExtractConfigBuilder, DEFAULT_DPI};
pub use error::{PageError, Pdf2PngError};
pub use extract::{create_output_dir, extract, extract_pages, ExtractSummary, PageOutcome};
pub use progress::{ExtractProgress, NoProgress};
