//! WASM bindings for StoryKid story export
//!
//! This crate provides JavaScript-friendly API for:
//! - Exporting a story row to PDF bytes
//! - Previewing the paginated layout as plain objects
//! - Computing the download file name
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { StoryPdfExporter } from 'storykid-wasm';
//!
//! await init();
//!
//! // Default configuration (French, A4 digital)
//! const exporter = new StoryPdfExporter();
//!
//! // Or override part of it
//! // const exporter = new StoryPdfExporter(JSON.stringify({ locale: "en" }));
//!
//! const bytes = exporter.exportStory(story, "hardcover_book");
//! const name = exporter.fileName(story, "hardcover_book");
//! ```

use serde::Serialize;
use story_export::{ExportConfig, ProductType, StoryExporter, StoryRecord};
use story_layout::Document;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Story to PDF exporter
#[wasm_bindgen]
pub struct StoryPdfExporter {
    inner: StoryExporter,
}

#[wasm_bindgen]
impl StoryPdfExporter {
    /// Create an exporter
    ///
    /// @param configJson - Optional export configuration JSON
    /// @returns StoryPdfExporter instance
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<StoryPdfExporter, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => ExportConfig::from_json(json).map_err(to_js_error)?,
            None => ExportConfig::default(),
        };
        Self::with_config(config).map_err(to_js_error)
    }

    /// Export a story to PDF
    ///
    /// @param story - Story row object
    /// @param productType - "digital" (default), "hardcover_book" or "softcover_book"
    /// @returns PDF bytes (Uint8Array)
    #[wasm_bindgen(js_name = exportStory)]
    pub fn export_story(
        &self,
        story: JsValue,
        product_type: Option<String>,
    ) -> Result<Vec<u8>, JsValue> {
        let story: StoryRecord = serde_wasm_bindgen::from_value(story)?;
        let exported = self
            .inner
            .export(&story, product(product_type))
            .map_err(to_js_error)?;
        Ok(exported.bytes)
    }

    /// Lay out a story without encoding it
    ///
    /// @param story - Story row object
    /// @param productType - Product type, as for exportStory
    /// @returns Document object with pages and text runs
    #[wasm_bindgen(js_name = layoutStory)]
    pub fn layout_story(
        &self,
        story: JsValue,
        product_type: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let story: StoryRecord = serde_wasm_bindgen::from_value(story)?;
        let document = self
            .inner
            .render(&story, product(product_type))
            .map_err(to_js_error)?;
        document_to_js(&document)
    }

    /// Download file name for a story
    ///
    /// @param story - Story row object
    /// @param productType - Product type, as for exportStory
    /// @returns File name (e.g., "Tom_et_le_phare_print.pdf")
    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(
        &self,
        story: JsValue,
        product_type: Option<String>,
    ) -> Result<String, JsValue> {
        let story: StoryRecord = serde_wasm_bindgen::from_value(story)?;
        Ok(product(product_type).file_name(&story.title))
    }
}

impl StoryPdfExporter {
    fn with_config(config: ExportConfig) -> story_export::Result<Self> {
        Ok(Self {
            inner: StoryExporter::new(config)?,
        })
    }
}

fn product(product_type: Option<String>) -> ProductType {
    ProductType::parse(product_type.as_deref())
}

fn document_to_js(document: &Document) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(document.serialize(&serializer)?)
}
