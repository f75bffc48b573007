//! Story to PDF export

use crate::config::ExportConfig;
use crate::product::ProductType;
use crate::record::{StoryRecord, COMPLETED_STATUS};
use crate::{ExportError, Result};
use log::{debug, info};
use pdf_core::DocumentInfo;
use story_layout::{
    encode_pdf, render_story_document, Document, LayoutConfig, MetadataField, RenderInput,
};

/// A rendered story ready for download
#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub product: ProductType,
}

/// Turns story records into paginated PDFs
#[derive(Debug, Clone)]
pub struct StoryExporter {
    config: ExportConfig,
}

impl StoryExporter {
    /// Create an exporter, rejecting layouts with unusable geometry
    pub fn new(config: ExportConfig) -> Result<Self> {
        config.layout.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Fail with `NotReady` while the story is still being generated
    pub fn check_ready(&self, story: &StoryRecord) -> Result<()> {
        if !self.config.require_completed || story.is_completed() {
            return Ok(());
        }

        let status = story.status.as_deref().unwrap_or("unknown");
        let reason = if status != COMPLETED_STATUS {
            format!("story '{}' has status '{}'", story.id, status)
        } else {
            format!("story '{}' has no content", story.id)
        };
        Err(ExportError::NotReady(reason))
    }

    /// Title, metadata, body and footer of a story
    pub fn story_input(&self, story: &StoryRecord) -> RenderInput {
        let locale = self.config.locale;
        let labels = locale.labels();
        let child_name = story.child_name.trim();

        let metadata = vec![
            MetadataField::new(labels.child, Some(child_name.to_string())),
            MetadataField::new(labels.age, story.child_age.map(|age| locale.child_age(age))),
            MetadataField::new(
                labels.theme,
                story.theme.as_deref().map(|theme| locale.theme_name(theme)),
            ),
            MetadataField::new(
                labels.length,
                story.story_length.as_deref().map(|length| locale.length_name(length)),
            ),
            MetadataField::new(labels.characters, story.characters_line()),
        ];

        RenderInput {
            title: story.title.trim().to_string(),
            metadata,
            body: story.content.clone().unwrap_or_default(),
            footer: locale.footer_lines(
                child_name,
                story.created_at.as_ref(),
                &self.config.brand,
            ),
        }
    }

    /// Layout for a product: base layout plus product geometry
    ///
    /// The placeholder is the export-level override if set, else the one in
    /// the base layout if it was changed from the default, else the
    /// localised text.
    pub fn layout_for(&self, product: ProductType) -> LayoutConfig {
        let mut layout = self.config.layout.clone();
        product.apply(&mut layout);
        if let Some(placeholder) = &self.config.placeholder {
            layout.placeholder = placeholder.clone();
        } else if layout.placeholder == LayoutConfig::default().placeholder {
            layout.placeholder = self.config.locale.placeholder().to_string();
        }
        layout
    }

    /// PDF metadata for a story
    pub fn document_info(&self, story: &StoryRecord) -> DocumentInfo {
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        let dedication = self
            .config
            .locale
            .footer_lines(&story.child_name, None, &self.config.brand)
            .into_iter()
            .next()
            .and_then(non_empty);

        DocumentInfo {
            title: non_empty(story.title.trim().to_string()),
            author: None,
            subject: dedication,
            producer: Some(self.config.brand.clone()),
            creation_date: story.created_at,
        }
    }

    /// Lay out a story without encoding it
    pub fn render(&self, story: &StoryRecord, product: ProductType) -> Result<Document> {
        self.check_ready(story)?;
        let document = render_story_document(&self.story_input(story), &self.layout_for(product))?;
        debug!(
            "Laid out story '{}' for {} on {} page(s)",
            story.id,
            product.as_str(),
            document.page_count()
        );
        Ok(document)
    }

    /// Layout as JSON, for previews
    pub fn layout_json(&self, story: &StoryRecord, product: ProductType) -> Result<String> {
        Ok(self.render(story, product)?.to_json()?)
    }

    /// Lay out and encode a story
    pub fn export(&self, story: &StoryRecord, product: ProductType) -> Result<ExportedPdf> {
        info!("Exporting story '{}' as {}", story.id, product.as_str());

        let document = self.render(story, product)?;
        let bytes = encode_pdf(&document, self.document_info(story))?;
        let filename = product.file_name(&story.title);

        info!(
            "Generated {} ({} pages, {} bytes)",
            filename,
            document.page_count(),
            bytes.len()
        );

        Ok(ExportedPdf {
            filename,
            bytes,
            page_count: document.page_count(),
            product,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use story_layout::RunKind;

    fn story() -> StoryRecord {
        StoryRecord {
            id: "s-1".to_string(),
            title: "Le dragon de Léa".to_string(),
            child_name: "Léa".to_string(),
            child_age: Some(7),
            theme: Some("foret".to_string()),
            characters: Some(vec!["dragon".to_string(), "hibou".to_string()]),
            content: Some("Il était une fois un dragon.\n\nIl volait.".to_string()),
            status: Some(COMPLETED_STATUS.to_string()),
            story_length: Some("short".to_string()),
            created_at: Some(Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()),
            illustration_urls: None,
        }
    }

    fn exporter() -> StoryExporter {
        StoryExporter::new(ExportConfig::default()).unwrap()
    }

    #[test]
    fn test_story_input_french() {
        let input = exporter().story_input(&story());
        let lines: Vec<String> = input.metadata.iter().filter_map(|m| m.line()).collect();

        assert_eq!(input.title, "Le dragon de Léa");
        assert_eq!(
            lines,
            vec![
                "Pour: Léa",
                "Âge: 7 ans",
                "Thème: Forêt enchantée",
                "Longueur: Courte",
                "Personnages: dragon, hibou",
            ]
        );
        assert_eq!(input.footer[1], "Créée le 15/01/2025");
    }

    #[test]
    fn test_story_input_skips_missing_fields() {
        let mut record = story();
        record.child_age = None;
        record.theme = None;
        record.characters = None;

        let input = exporter().story_input(&record);
        let lines: Vec<String> = input.metadata.iter().filter_map(|m| m.line()).collect();
        assert_eq!(lines, vec!["Pour: Léa", "Longueur: Courte"]);
    }

    #[test]
    fn test_not_ready() {
        let mut record = story();
        record.status = Some("generating".to_string());
        let result = exporter().export(&record, ProductType::Digital);
        assert!(matches!(result, Err(ExportError::NotReady(_))));

        let mut record = story();
        record.content = None;
        let result = exporter().render(&record, ProductType::Digital);
        assert!(matches!(result, Err(ExportError::NotReady(_))));
    }

    #[test]
    fn test_placeholder_when_not_required() {
        let config = ExportConfig {
            require_completed: false,
            ..Default::default()
        };
        let mut record = story();
        record.content = None;
        record.status = Some("generating".to_string());

        let document = StoryExporter::new(config)
            .unwrap()
            .render(&record, ProductType::Digital)
            .unwrap();
        let placeholder: Vec<&str> = document
            .runs_of(RunKind::Placeholder)
            .map(|run| run.text.as_str())
            .collect();
        assert_eq!(placeholder, vec!["Contenu en cours de préparation."]);
    }

    #[test]
    fn test_layout_for_products() {
        let exporter = exporter();
        let digital = exporter.layout_for(ProductType::Digital);
        assert_eq!(digital.page_size.width, 595.0);
        assert_eq!(digital.margin, 50.0);

        let print = exporter.layout_for(ProductType::SoftcoverBook);
        assert_eq!(print.page_size.height, 793.7);
        assert_eq!(print.margin, 56.0);
        assert_eq!(print.placeholder, "Contenu en cours de préparation.");
    }

    #[test]
    fn test_placeholder_override() {
        let config = ExportConfig {
            locale: Locale::En,
            placeholder: Some("Coming soon.".to_string()),
            ..Default::default()
        };
        let exporter = StoryExporter::new(config).unwrap();
        assert_eq!(exporter.layout_for(ProductType::Digital).placeholder, "Coming soon.");
    }

    #[test]
    fn test_layout_placeholder_kept() {
        let config = ExportConfig::from_json(
            r#"{ "locale": "fr-FR", "layout": { "placeholder": "Bientôt disponible." } }"#,
        )
        .unwrap();
        let exporter = StoryExporter::new(config).unwrap();
        assert_eq!(
            exporter.layout_for(ProductType::HardcoverBook).placeholder,
            "Bientôt disponible."
        );

        let config = ExportConfig::from_json(
            r#"{ "placeholder": "Coming soon.", "layout": { "placeholder": "Bientôt." } }"#,
        )
        .unwrap();
        let exporter = StoryExporter::new(config).unwrap();
        assert_eq!(exporter.layout_for(ProductType::Digital).placeholder, "Coming soon.");
    }

    #[test]
    fn test_document_info() {
        let info = exporter().document_info(&story());
        assert_eq!(info.title.as_deref(), Some("Le dragon de Léa"));
        assert_eq!(info.subject.as_deref(), Some("Histoire personnalisée pour Léa"));
        assert_eq!(info.producer.as_deref(), Some("StoryKid AI"));
        assert_eq!(info.creation_date, story().created_at);
    }

    #[test]
    fn test_rejects_unusable_layout() {
        let mut config = ExportConfig::default();
        config.layout.margin = 300.0;
        let result = StoryExporter::new(config);
        assert!(matches!(result, Err(ExportError::Layout(_))));
    }

    #[test]
    fn test_layout_json() {
        let json = exporter().layout_json(&story(), ProductType::Digital).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pages"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["pages"][0]["textRuns"][0]["kind"], "title");
    }
}
