//! Configuration for a PDF page extraction run.
//!
//! Behaviour is controlled through [`ExtractConfig`], built via its
//! [`ExtractConfigBuilder`]. The CLI never changes the defaults — the tool
//! deliberately has no resolution or format knobs — but keeping the DPI in
//! a config struct lets library callers and tests render at a sane size
//! instead of the full 500 DPI production setting.

use crate::error::Pdf2PngError;

/// Default rasterisation resolution in dots per inch.
///
/// 500 DPI produces print-quality page images. A US-Letter page comes out
/// around 4250 × 5500 px, so expect multi-megabyte PNGs per page.
pub const DEFAULT_DPI: u32 = 500;

/// Configuration for a page extraction run.
///
/// Built via [`ExtractConfig::builder()`] or using
/// [`ExtractConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2png::ExtractConfig;
///
/// let config = ExtractConfig::builder().dpi(150).build().unwrap();
/// assert_eq!(config.dpi, 150);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Rendering DPI used when rasterising each page. Default: 500.
    ///
    /// PDF page geometry is expressed in points (1/72 in), so the render
    /// scale factor is `dpi / 72`. The interactive CLI always uses the
    /// default; the field exists for library callers and tests.
    pub dpi: u32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI }
    }
}

impl ExtractConfig {
    /// Create a new builder for `ExtractConfig`.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractConfig`].
#[derive(Debug)]
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractConfig, Pdf2PngError> {
        if self.config.dpi == 0 {
            return Err(Pdf2PngError::InvalidConfig("DPI must be ≥ 1".into()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dpi_is_500() {
        assert_eq!(ExtractConfig::default().dpi, 500);
    }

    #[test]
    fn zero_dpi_is_rejected() {
        let err = ExtractConfig::builder().dpi(0).build().unwrap_err();
        assert!(err.to_string().contains("DPI"));
    }

    #[test]
    fn builder_overrides() {
        let c = ExtractConfig::builder().dpi(96).build().unwrap();
        assert_eq!(c.dpi, 96);
    }
}
