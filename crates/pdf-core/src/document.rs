//! PDF document builder

use crate::text::TextObject;
use crate::{Align, FontFamily, FontStyle, FontWeight, PdfError, Result, StandardFont};
use chrono::{DateTime, Utc};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Document metadata written to the `/Info` dictionary
///
/// No field is filled in automatically. In particular the creation date is
/// never read from the clock, so identical input produces identical bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.producer.is_none()
            && self.creation_date.is_none()
    }

    fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        let text_fields = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Producer", &self.producer),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                dict.set(key, text_string(value));
            }
        }
        if let Some(date) = &self.creation_date {
            dict.set(
                "CreationDate",
                Object::String(pdf_date(date).into_bytes(), StringFormat::Literal),
            );
        }
        dict
    }
}

/// Encode a text string as UTF-16BE with a byte order mark
fn text_string(value: &str) -> Object {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Format a date as `D:YYYYMMDDHHmmSS+00'00'`
fn pdf_date(date: &DateTime<Utc>) -> String {
    date.format("D:%Y%m%d%H%M%S+00'00'").to_string()
}

/// A page being built
struct PageState {
    width: f64,
    height: f64,
    /// Uncompressed content stream operators
    content: Vec<u8>,
    /// Fonts referenced from this page's content
    fonts: BTreeSet<StandardFont>,
}

/// PDF document builder
///
/// Pages are created with [`PdfDocument::add_page`] and filled with
/// [`PdfDocument::insert_text`]. Nothing is assembled until
/// [`PdfDocument::to_bytes`] or [`PdfDocument::save`] consumes the builder.
pub struct PdfDocument {
    pages: Vec<PageState>,
    /// Font resource names, shared by all pages ("F1", "F2", ...)
    font_resources: BTreeMap<StandardFont, String>,
    /// Next font resource number
    next_font_resource: u32,
    /// Current font family
    current_family: Option<FontFamily>,
    /// Current font weight
    current_weight: FontWeight,
    /// Current font style
    current_style: FontStyle,
    /// Current font size
    current_font_size: f32,
    /// Current text color
    current_text_color: Color,
    info: DocumentInfo,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    /// Create an empty document with no pages
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            font_resources: BTreeMap::new(),
            next_font_resource: 1,
            current_family: None,
            current_weight: FontWeight::default(),
            current_style: FontStyle::default(),
            current_font_size: 12.0,
            current_text_color: Color::default(),
            info: DocumentInfo::default(),
        }
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append a blank page of the given size
    ///
    /// # Returns
    /// New page number (1-indexed)
    ///
    /// # Example
    /// ```
    /// use pdf_core::PdfDocument;
    ///
    /// let mut doc = PdfDocument::new();
    /// assert_eq!(doc.add_page(595.0, 842.0).unwrap(), 1);
    /// assert_eq!(doc.add_page(595.0, 842.0).unwrap(), 2);
    /// ```
    pub fn add_page(&mut self, width: f64, height: f64) -> Result<usize> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(PdfError::InvalidPageSize(width, height));
        }

        self.pages.push(PageState {
            width,
            height,
            content: Vec::new(),
            fonts: BTreeSet::new(),
        });

        Ok(self.pages.len())
    }

    /// Get the size of a page in points
    pub fn page_size(&self, page: usize) -> Result<(f64, f64)> {
        let state = self.page(page)?;
        Ok((state.width, state.height))
    }

    fn page(&self, page: usize) -> Result<&PageState> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .ok_or(PdfError::InvalidPage(page, self.pages.len()))
    }

    fn page_mut(&mut self, page: usize) -> Result<&mut PageState> {
        let page_count = self.pages.len();
        page.checked_sub(1)
            .and_then(|index| self.pages.get_mut(index))
            .ok_or(PdfError::InvalidPage(page, page_count))
    }

    /// Set the current font and size
    ///
    /// `name` is either a family (`"Helvetica"`, `"Courier"`) or the full
    /// PostScript name of a variant (`"Helvetica-Bold"`), in which case the
    /// weight and style are taken from the variant.
    ///
    /// # Example
    /// ```
    /// use pdf_core::{FontWeight, PdfDocument};
    ///
    /// let mut doc = PdfDocument::new();
    /// doc.set_font("Helvetica", 12.0).unwrap();
    /// doc.set_font_weight(FontWeight::Bold).unwrap();
    /// assert!(doc.set_font("Comic-Sans", 12.0).is_err());
    /// ```
    pub fn set_font(&mut self, name: &str, size: f32) -> Result<()> {
        let font =
            StandardFont::from_name(name).ok_or_else(|| PdfError::FontNotFound(name.to_string()))?;
        if !size.is_finite() || size <= 0.0 {
            return Err(PdfError::InvalidFontSize(size));
        }

        self.current_family = Some(font.family());
        self.current_weight = font.weight();
        self.current_style = font.style();
        self.current_font_size = size;

        Ok(())
    }

    /// Set only the font size (keeps current family/weight/style)
    pub fn set_font_size(&mut self, size: f32) -> Result<()> {
        if self.current_family.is_none() {
            return Err(PdfError::FontNotFound("No font family set".to_string()));
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(PdfError::InvalidFontSize(size));
        }

        self.current_font_size = size;
        Ok(())
    }

    /// Set the font weight (keeps current family/size/style)
    pub fn set_font_weight(&mut self, weight: FontWeight) -> Result<()> {
        if self.current_family.is_none() {
            return Err(PdfError::FontNotFound("No font family set".to_string()));
        }

        self.current_weight = weight;
        Ok(())
    }

    /// Set the font style (keeps current family/size/weight)
    pub fn set_font_style(&mut self, style: FontStyle) -> Result<()> {
        if self.current_family.is_none() {
            return Err(PdfError::FontNotFound("No font family set".to_string()));
        }

        self.current_style = style;
        Ok(())
    }

    /// Set the text color
    ///
    /// # Example
    /// ```ignore
    /// doc.set_text_color(Color::rgb(0.12, 0.23, 0.54)); // Title blue
    /// doc.set_text_color(Color::rgb(0.5, 0.5, 0.5)); // Gray
    /// doc.set_text_color(Color::from_rgb(255, 128, 0)); // Orange
    /// ```
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Set the `/Info` metadata
    pub fn set_info(&mut self, info: DocumentInfo) {
        self.info = info;
    }

    /// Get the font selected by family, weight and style
    pub fn current_font(&self) -> Result<StandardFont> {
        let family = self
            .current_family
            .ok_or_else(|| PdfError::FontNotFound("No font family set".to_string()))?;
        Ok(family.variant(self.current_weight, self.current_style))
    }

    /// Get current font's text width for a string, in points
    ///
    /// # Example
    /// ```
    /// use pdf_core::PdfDocument;
    ///
    /// let mut doc = PdfDocument::new();
    /// doc.set_font("Courier", 10.0).unwrap();
    /// assert_eq!(doc.get_text_width("Hello").unwrap(), 30.0);
    /// ```
    pub fn get_text_width(&self, text: &str) -> Result<f64> {
        let font = self.current_font()?;
        Ok(font.text_width_points(text, self.current_font_size))
    }

    /// Get or create the resource name of a font ("F1", "F2", ...)
    fn font_resource_name(&mut self, font: StandardFont) -> String {
        if let Some(name) = self.font_resources.get(&font) {
            return name.clone();
        }

        let name = format!("F{}", self.next_font_resource);
        self.next_font_resource += 1;
        self.font_resources.insert(font, name.clone());
        name
    }

    /// Insert text at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points (from bottom)
    /// * `align` - Whether `x` is the left edge, centre or right edge
    pub fn insert_text(
        &mut self,
        text: &str,
        page: usize,
        x: f64,
        y: f64,
        align: Align,
    ) -> Result<()> {
        self.page(page)?;

        // Skip empty text - nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let font = self.current_font()?;
        let resource = self.font_resource_name(font);
        let object = TextObject {
            font: &resource,
            size: self.current_font_size,
            color: self.current_text_color,
            width: font.text_width_points(text, self.current_font_size),
        };
        let operators = object.operators(&font.encode_text_hex(text), x, y, align);

        let state = self.page_mut(page)?;
        state.content.extend_from_slice(&operators);
        state.fonts.insert(font);

        Ok(())
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Assemble the document and serialize it
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        let mut doc = self.build()?;

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        log::debug!(
            "Serialized PDF: {} pages, {} bytes",
            self.pages.len(),
            buffer.len()
        );
        Ok(buffer)
    }

    /// Build the lopdf object graph
    fn build(&self) -> Result<Document> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let font_ids: BTreeMap<StandardFont, ObjectId> = self
            .font_resources
            .keys()
            .map(|font| (*font, doc.add_object(font.to_pdf_object())))
            .collect();

        let mut kids = Vec::with_capacity(self.pages.len());
        for state in &self.pages {
            let contents_id = doc.add_object(compress_content(&state.content)?);

            let mut font_dict = Dictionary::new();
            for font in &state.fonts {
                if let (Some(name), Some(id)) = (self.font_resources.get(font), font_ids.get(font))
                {
                    font_dict.set(name.as_bytes(), Object::Reference(*id));
                }
            }
            let mut resources = Dictionary::new();
            resources.set("Font", Object::Dictionary(font_dict));

            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(state.width as f32),
                    Object::Real(state.height as f32),
                ]),
            );
            page_dict.set("Resources", Object::Dictionary(resources));
            page_dict.set("Contents", Object::Reference(contents_id));

            kids.push(Object::Reference(doc.add_object(page_dict)));
        }

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", Object::Integer(kids.len() as i64));
        pages_dict.set("Kids", Object::Array(kids));
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        if !self.info.is_empty() {
            let info_id = doc.add_object(self.info.to_dictionary());
            doc.trailer.set("Info", Object::Reference(info_id));
        }

        Ok(doc)
    }
}

/// Compress a content stream with FlateDecode (zlib)
fn compress_content(content: &[u8]) -> Result<Stream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content)?;
    let data = encoder.finish()?;

    let mut dict = Dictionary::new();
    dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
    Ok(Stream::new(dict, data))
}
