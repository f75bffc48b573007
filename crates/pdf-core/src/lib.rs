//! PDF Core - Low-level PDF writing
//!
//! This crate provides functionality for:
//! - Building a fresh PDF document page by page
//! - Measuring and encoding text with the standard Helvetica/Courier fonts
//! - Inserting text at specific coordinates
//! - Writing document metadata (`/Info`)
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{PdfDocument, Align};
//!
//! let mut doc = PdfDocument::new();
//! let page = doc.add_page(595.0, 842.0)?;
//! doc.set_font("Helvetica", 12.0)?;
//! doc.insert_text("Il était une fois...", page, 50.0, 792.0, Align::Left)?;
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
mod encoding;
mod font;
mod text;

pub use document::{Color, DocumentInfo, PdfDocument};
pub use encoding::{to_win_ansi, win_ansi_bytes, FALLBACK_CHAR};
pub use font::{FontFamily, FontStyle, FontWeight, StandardFont};
pub use text::{calculate_x_offset, format_number, TextObject};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Invalid font size: {0}")]
    InvalidFontSize(f32),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("Invalid page size: {0} x {1}")]
    InvalidPageSize(f64, f64),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Common page sizes in points (1/72 inch)
pub mod page_size {
    /// ISO A4 width
    pub const A4_WIDTH: f64 = 595.0;
    /// ISO A4 height
    pub const A4_HEIGHT: f64 = 842.0;
    /// Photobook 210 x 280 mm width
    pub const BOOK_210X280_WIDTH: f64 = 595.28;
    /// Photobook 210 x 280 mm height
    pub const BOOK_210X280_HEIGHT: f64 = 793.7;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_default() {
        assert_eq!(Align::default(), Align::Left);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PdfError::InvalidPage(3, 2).to_string(),
            "Invalid page number: 3 (document has 2 pages)"
        );
        assert_eq!(
            PdfError::FontNotFound("Comic-Sans".to_string()).to_string(),
            "Font not found: Comic-Sans"
        );
    }

    #[test]
    fn test_book_page_is_210_by_280_mm() {
        let mm = 72.0 / 25.4;
        assert!((page_size::BOOK_210X280_WIDTH - 210.0 * mm).abs() < 0.01);
        assert!((page_size::BOOK_210X280_HEIGHT - 280.0 * mm).abs() < 0.01);
    }
}
