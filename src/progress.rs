//! Progress-callback trait for per-page extraction events.
//!
//! The library never prints; the binary (or any other host) injects an
//! [`ExtractProgress`] implementation to receive events as each page is
//! rendered and saved. The callback approach is the least-invasive
//! integration point: callers can forward events to a terminal, a log
//! file, or a GUI without the library knowing how the host communicates.

/// Receives per-page events during an extraction run.
///
/// All methods have empty default bodies, so implementors override only
/// the events they care about.
pub trait ExtractProgress {
    /// Called once before the page loop, with the document's page count.
    fn on_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called after a page was rendered, encoded, and written.
    fn on_page_saved(&self, page_num: usize, file_name: &str) {
        let _ = (page_num, file_name);
    }

    /// Called when a page failed; the run continues with the next page.
    fn on_page_error(&self, page_num: usize, error: &str) {
        let _ = (page_num, error);
    }

    /// Called once after the page loop, whatever the per-page outcomes.
    fn on_complete(&self, saved: usize, total_pages: usize) {
        let _ = (saved, total_pages);
    }
}

/// A no-op progress sink for callers that do not want events.
pub struct NoProgress;

impl ExtractProgress for NoProgress {}
