//! Story Layout - word wrap and pagination
//!
//! This crate turns a story (title, metadata lines, free-form body text and
//! footer lines) into a [`Document`] of fixed-size pages holding positioned
//! text runs:
//! - Paragraph splitting on blank lines
//! - Greedy word wrap driven by font metrics
//! - Page breaks with a bottom reserve
//! - Footer lines anchored on the last page
//!
//! The resulting document can be serialized to PDF with [`encode_pdf`].
//!
//! # Example
//!
//! ```ignore
//! use story_layout::{render_story_document, encode_pdf, LayoutConfig, RenderInput};
//!
//! let input = RenderInput {
//!     title: "Le dragon de Léa".to_string(),
//!     body: "Il était une fois...".to_string(),
//!     ..Default::default()
//! };
//! let document = render_story_document(&input, &LayoutConfig::default())?;
//! let pdf_bytes = encode_pdf(&document, Default::default())?;
//! ```

mod config;
mod encode;
mod metrics;
mod model;
pub mod paragraph;
mod renderer;

pub use config::{LayoutConfig, PageSize, TextAlign, TextStyle};
pub use encode::encode_pdf;
pub use metrics::{FontMetrics, StandardMetrics};
pub use model::{Color, Document, Page, RunKind, TextRun};
pub use renderer::{render_story_document, MetadataField, PaginatedTextRenderer, RenderInput};

use thiserror::Error;

/// Errors that can occur during layout
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("Font metrics unavailable for {font} at {size}pt")]
    FontMetricsUnavailable { font: String, size: f32 },

    #[error("Invalid layout configuration: {0}")]
    Config(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LayoutError::FontMetricsUnavailable {
            font: "Comic-Sans".to_string(),
            size: 12.0,
        };
        assert_eq!(err.to_string(), "Font metrics unavailable for Comic-Sans at 12pt");

        let err = LayoutError::InvalidGeometry("margin must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid page geometry: margin must be positive");
    }

    #[test]
    fn test_pdf_error_converts() {
        let err: LayoutError = pdf_core::PdfError::FontNotFound("X".to_string()).into();
        assert!(matches!(err, LayoutError::Pdf(_)));
    }
}
