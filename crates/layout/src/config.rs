//! Layout configuration

use crate::model::Color;
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Page size in points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PageSize {
    fn default() -> Self {
        Self {
            width: pdf_core::page_size::A4_WIDTH,
            height: pdf_core::page_size::A4_HEIGHT,
        }
    }
}

/// Font, size and color of one kind of text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextStyle {
    /// Font identifier (PostScript name, e.g. "Helvetica-Bold")
    pub font: String,
    /// Font size in points
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: &str, size: f32, color: Color) -> Self {
        Self {
            font: font.to_string(),
            size,
            color,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("Helvetica", 12.0, Color::black())
    }
}

/// Horizontal alignment of title and footer lines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl From<TextAlign> for pdf_core::Align {
    fn from(align: TextAlign) -> Self {
        match align {
            TextAlign::Left => pdf_core::Align::Left,
            TextAlign::Center => pdf_core::Align::Center,
            TextAlign::Right => pdf_core::Align::Right,
        }
    }
}

/// Page geometry and typography for story layout
///
/// Every field has a default, so `{}` is a valid configuration and any subset
/// of fields can be overridden from JSON:
///
/// ```
/// use story_layout::LayoutConfig;
///
/// let config = LayoutConfig::from_json(r#"{ "margin": 56, "body": { "size": 13 } }"#).unwrap();
/// assert_eq!(config.margin, 56.0);
/// assert_eq!(config.body.size, 13.0);
/// assert_eq!(config.page_size.width, 595.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    /// Margin on all four sides
    pub margin: f64,
    /// Line height as a multiple of the font size
    pub line_spacing: f64,

    pub title: TextStyle,
    /// Extra space below the title block
    pub title_gap: f64,
    pub title_align: TextAlign,

    pub metadata: TextStyle,
    /// Extra space between the metadata block and the body
    pub section_gap: f64,

    pub body: TextStyle,
    /// Text placed when the body is empty
    pub placeholder: String,

    pub footer: TextStyle,
    /// Baseline of the first footer line, from the page bottom
    pub footer_top: f64,
    /// Distance between consecutive footer baselines
    pub footer_spacing: f64,
    pub footer_align: TextAlign,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            margin: 50.0,
            line_spacing: 1.5,
            title: TextStyle::new("Helvetica-Bold", 24.0, Color::rgb(0.12, 0.23, 0.54)),
            title_gap: 10.0,
            title_align: TextAlign::Left,
            metadata: TextStyle::new("Helvetica", 14.0, Color::rgb(0.3, 0.3, 0.3)),
            section_gap: 10.0,
            body: TextStyle::new("Helvetica", 12.0, Color::black()),
            placeholder: "Content pending.".to_string(),
            footer: TextStyle::new("Helvetica", 10.0, Color::gray()),
            footer_top: 70.0,
            footer_spacing: 20.0,
            footer_align: TextAlign::Left,
        }
    }
}

/// Title lines advance by this multiple of the title size
pub(crate) const TITLE_LINE_FACTOR: f64 = 1.6;

impl LayoutConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LayoutError::Config(e.to_string()))
    }

    /// Check that the geometry leaves a usable text area
    pub fn validate(&self) -> Result<()> {
        let PageSize { width, height } = self.page_size;
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(width) || !positive(height) {
            return Err(LayoutError::InvalidGeometry(format!(
                "page size must be positive, got {width} x {height}"
            )));
        }
        if !positive(self.margin) {
            return Err(LayoutError::InvalidGeometry(format!(
                "margin must be positive, got {}",
                self.margin
            )));
        }
        if 2.0 * self.margin >= width || 2.0 * self.margin >= height {
            return Err(LayoutError::InvalidGeometry(format!(
                "margin {} leaves no room on a {width} x {height} page",
                self.margin
            )));
        }
        if !positive(self.line_spacing) {
            return Err(LayoutError::Config(format!(
                "lineSpacing must be positive, got {}",
                self.line_spacing
            )));
        }

        let finite = [
            ("titleGap", self.title_gap),
            ("sectionGap", self.section_gap),
            ("footerTop", self.footer_top),
            ("footerSpacing", self.footer_spacing),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LayoutError::Config(format!("{name} must be finite, got {value}")));
        }

        Ok(())
    }

    /// Width available to a line
    pub fn usable_width(&self) -> f64 {
        self.page_size.width - 2.0 * self.margin
    }

    /// Baseline of the first line on a page
    pub fn top(&self) -> f64 {
        self.page_size.height - self.margin
    }

    /// Line height for a style
    pub fn line_height(&self, style: &TextStyle) -> f64 {
        style.size as f64 * self.line_spacing
    }

    /// Vertical advance of one title line
    pub fn title_line_height(&self) -> f64 {
        self.title.size as f64 * TITLE_LINE_FACTOR
    }

    /// Lowest baseline a flowed line may start from
    ///
    /// A line whose baseline would sit below `margin + 3 * line_height`
    /// moves to the next page.
    pub fn page_floor(&self, line_height: f64) -> f64 {
        self.margin + 3.0 * line_height
    }
}
