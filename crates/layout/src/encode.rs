//! Document to PDF encoding

use crate::model::Document;
use crate::Result;
use pdf_core::{Align, DocumentInfo, PdfDocument};

/// Serialize a laid-out document to PDF bytes
///
/// Each page becomes one PDF page of the same size and each text run one
/// text object at the run's origin.
pub fn encode_pdf(document: &Document, info: DocumentInfo) -> Result<Vec<u8>> {
    let mut pdf = PdfDocument::new();
    pdf.set_info(info);

    for page in &document.pages {
        let number = pdf.add_page(page.width, page.height)?;
        for run in &page.text_runs {
            pdf.set_font(&run.font, run.size)?;
            pdf.set_text_color(run.color.into());
            pdf.insert_text(&run.text, number, run.x, run.y, Align::Left)?;
        }
    }

    Ok(pdf.to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Page, RunKind, TextRun};
    use crate::LayoutError;

    fn run(font: &str) -> TextRun {
        TextRun {
            text: "Bonjour".to_string(),
            x: 50.0,
            y: 792.0,
            font: font.to_string(),
            size: 12.0,
            color: Color::black(),
            kind: RunKind::Body,
        }
    }

    #[test]
    fn test_encode_pages() {
        let mut page = Page::new(595.0, 842.0);
        page.text_runs.push(run("Helvetica"));
        let document = Document {
            pages: vec![page.clone(), page],
        };

        let bytes = encode_pdf(&document, DocumentInfo::default()).unwrap();
        let reloaded = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(reloaded.get_pages().len(), 2);
    }

    #[test]
    fn test_unknown_font_is_pdf_error() {
        let mut page = Page::new(595.0, 842.0);
        page.text_runs.push(run("Sarabun"));
        let document = Document { pages: vec![page] };

        let result = encode_pdf(&document, DocumentInfo::default());
        assert!(matches!(result, Err(LayoutError::Pdf(_))));
    }
}
