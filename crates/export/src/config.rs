//! Export configuration

use crate::locale::Locale;
use crate::{ExportError, Result};
use serde::{Deserialize, Serialize};
use story_layout::LayoutConfig;

/// Settings shared by every export
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// Name shown in the attribution footer and as PDF producer
    pub brand: String,
    pub locale: Locale,
    /// Refuse stories that are still being generated
    pub require_completed: bool,
    /// Overrides the localised placeholder for empty stories
    pub placeholder: Option<String>,
    /// Base layout; the product geometry is applied on top
    pub layout: LayoutConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            brand: "StoryKid AI".to_string(),
            locale: Locale::default(),
            require_completed: true,
            placeholder: None,
            layout: LayoutConfig::default(),
        }
    }
}

impl ExportConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ExportError::ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::from_json("{}").unwrap();
        assert_eq!(config, ExportConfig::default());
        assert_eq!(config.brand, "StoryKid AI");
        assert!(config.require_completed);
    }

    #[test]
    fn test_partial_json() {
        let config = ExportConfig::from_json(
            r#"{ "locale": "en", "requireCompleted": false, "layout": { "margin": 40 } }"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::En);
        assert!(!config.require_completed);
        assert_eq!(config.layout.margin, 40.0);
        assert_eq!(config.layout.line_spacing, 1.5);
    }

    #[test]
    fn test_invalid_json() {
        let result = ExportConfig::from_json(r#"{ "locale": "de" }"#);
        assert!(matches!(result, Err(ExportError::ConfigError(_))));
    }
}
