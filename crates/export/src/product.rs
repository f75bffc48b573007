//! Product profiles: page geometry and file names

use log::warn;
use pdf_core::page_size;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use story_layout::{LayoutConfig, PageSize};

/// Margin of printed books, slightly wider for the binding
const PRINT_MARGIN: f64 = 56.0;

/// What the exported PDF is for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    /// Download on screen, A4
    #[default]
    Digital,
    HardcoverBook,
    SoftcoverBook,
}

impl ProductType {
    /// Read the `product_type` field of an export request
    ///
    /// A missing or empty value means a digital download. An unrecognised
    /// value falls back to a hardcover book.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim).unwrap_or_default() {
            "" | "digital" => ProductType::Digital,
            "hardcover_book" => ProductType::HardcoverBook,
            "softcover_book" => ProductType::SoftcoverBook,
            other => {
                warn!("Unknown product type '{}', using hardcover_book", other);
                ProductType::HardcoverBook
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Digital => "digital",
            ProductType::HardcoverBook => "hardcover_book",
            ProductType::SoftcoverBook => "softcover_book",
        }
    }

    pub fn is_print(self) -> bool {
        !matches!(self, ProductType::Digital)
    }

    /// Apply the product geometry on top of a base layout
    pub fn apply(self, layout: &mut LayoutConfig) {
        if self.is_print() {
            layout.page_size = PageSize {
                width: page_size::BOOK_210X280_WIDTH,
                height: page_size::BOOK_210X280_HEIGHT,
            };
            layout.margin = PRINT_MARGIN;
        }
    }

    /// Download file name for a story title
    pub fn file_name(self, title: &str) -> String {
        let stem = sanitize_file_stem(title);
        if self.is_print() {
            format!("{stem}_print.pdf")
        } else {
            format!("{stem}.pdf")
        }
    }
}

fn unsafe_chars() -> &'static Regex {
    static UNSAFE_CHARS: OnceLock<Regex> = OnceLock::new();
    UNSAFE_CHARS.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]").expect("file name pattern is valid"))
}

/// Replace every character outside `[A-Za-z0-9]` with `_`
///
/// An empty title becomes `story`.
pub fn sanitize_file_stem(title: &str) -> String {
    if title.is_empty() {
        return "story".to_string();
    }
    unsafe_chars().replace_all(title, "_").into_owned()
}
