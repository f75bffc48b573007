//! Laid-out document model

use serde::{Deserialize, Serialize};

/// RGB Color for text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    /// Red component (0.0 - 1.0)
    pub r: f64,
    /// Green component (0.0 - 1.0)
    pub g: f64,
    /// Blue component (0.0 - 1.0)
    pub b: f64,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub fn gray() -> Self {
        Self::rgb(0.5, 0.5, 0.5)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for pdf_core::Color {
    fn from(color: Color) -> Self {
        pdf_core::Color::rgb(color.r as f32, color.g as f32, color.b as f32)
    }
}

/// What part of the story a run belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Title,
    Metadata,
    Body,
    Placeholder,
    Footer,
}

/// One positioned, styled string
///
/// `(x, y)` is the left end of the baseline, with `y` measured from the page
/// bottom.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: String,
    pub size: f32,
    pub color: Color,
    pub kind: RunKind,
}

/// One fixed-size page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub text_runs: Vec<TextRun>,
}

impl Page {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            text_runs: Vec::new(),
        }
    }

    /// Runs of one kind, top to bottom
    pub fn runs_of(&self, kind: RunKind) -> impl Iterator<Item = &TextRun> {
        self.text_runs.iter().filter(move |run| run.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.text_runs.is_empty()
    }
}

/// A laid-out story: at least one page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn last_page(&self) -> Option<&Page> {
        self.pages.last()
    }

    /// Runs of one kind across all pages, in reading order
    pub fn runs_of(&self, kind: RunKind) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(move |page| page.runs_of(kind))
    }

    /// Every word of the body, in reading order
    pub fn body_words(&self) -> Vec<&str> {
        self.runs_of(RunKind::Body)
            .flat_map(|run| run.text.split_whitespace())
            .collect()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
