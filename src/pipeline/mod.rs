//! Pipeline stages for PDF-to-PNG extraction.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch rendering backend) without touching
//! other stages.
//!
//! ```text
//! input ──▶ render ──▶ encode
//! (path)   (pdfium)   (PNG bytes)
//! ```
//!
//! 1. [`input`]  — validate the user-supplied path and derive output names
//! 2. [`render`] — rasterise pages at a fixed DPI via pdfium
//! 3. [`encode`] — PNG-encode each `DynamicImage` for the disk write

pub mod encode;
pub mod input;
pub mod render;
