//! Story Export - story records to paginated PDF
//!
//! This crate provides:
//! - Story record parsing (database row JSON)
//! - Readiness checks before export
//! - Localised metadata and footer lines
//! - Product profiles for digital and printed books
//! - End-to-end export to PDF bytes with a sanitized file name
//!
//! # Example
//!
//! ```ignore
//! use story_export::{parse_story, ExportConfig, ProductType, StoryExporter};
//!
//! let story = parse_story(story_json)?;
//! let exporter = StoryExporter::new(ExportConfig::default())?;
//! let pdf = exporter.export(&story, ProductType::Digital)?;
//! std::fs::write(&pdf.filename, &pdf.bytes)?;
//! ```

mod config;
mod exporter;
mod locale;
mod product;
mod record;

pub use config::ExportConfig;
pub use exporter::{ExportedPdf, StoryExporter};
pub use locale::{Labels, Locale};
pub use product::{sanitize_file_stem, ProductType};
pub use record::{parse_story, StoryRecord, COMPLETED_STATUS};

use thiserror::Error;

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to parse story: {0}")]
    ParseError(String),

    #[error("Story is not completed yet: {0}")]
    NotReady(String),

    #[error("Invalid export configuration: {0}")]
    ConfigError(String),

    #[error("Layout error: {0}")]
    Layout(#[from] story_layout::LayoutError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
