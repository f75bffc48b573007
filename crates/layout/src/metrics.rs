//! Font metrics used for line breaking

use crate::{LayoutError, Result};
use pdf_core::StandardFont;

/// Measures rendered text width
///
/// Implementations must be deterministic and must agree with the widths the
/// encoder will draw. One instance is shared read-only by concurrent renders.
pub trait FontMetrics: Send + Sync {
    /// Width in points of `text` set in `font` at `size`
    fn text_width(&self, font: &str, size: f32, text: &str) -> Result<f64>;
}

/// Metrics of the standard Helvetica and Courier fonts
///
/// The width tables are compile-time constants, so one value can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

impl StandardMetrics {
    /// Resolve a font identifier, rejecting unknown fonts and unusable sizes
    pub fn resolve(font: &str, size: f32) -> Result<StandardFont> {
        let unavailable = || LayoutError::FontMetricsUnavailable {
            font: font.to_string(),
            size,
        };

        if !size.is_finite() || size <= 0.0 {
            return Err(unavailable());
        }
        StandardFont::from_name(font).ok_or_else(unavailable)
    }
}

impl FontMetrics for StandardMetrics {
    fn text_width(&self, font: &str, size: f32, text: &str) -> Result<f64> {
        Ok(Self::resolve(font, size)?.text_width_points(text, size))
    }
}
