//! Localised strings for exported stories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Language of labels, dates and footer lines
///
/// Deserializes from a language code (`fr`, `fr-FR`, `en_US`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

/// Metadata labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub child: &'static str,
    pub age: &'static str,
    pub theme: &'static str,
    pub length: &'static str,
    pub characters: &'static str,
}

const FR_LABELS: Labels = Labels {
    child: "Pour",
    age: "Âge",
    theme: "Thème",
    length: "Longueur",
    characters: "Personnages",
};

const EN_LABELS: Labels = Labels {
    child: "For",
    age: "Age",
    theme: "Theme",
    length: "Length",
    characters: "Characters",
};

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Locale::from_code(&code).ok_or_else(|| format!("unsupported locale '{code}'"))
    }
}

impl Locale {
    /// Parse a language code such as `fr`, `fr-FR` or `en_US`
    pub fn from_code(code: &str) -> Option<Self> {
        let language = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match language.as_str() {
            "fr" => Some(Locale::Fr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn labels(self) -> Labels {
        match self {
            Locale::Fr => FR_LABELS,
            Locale::En => EN_LABELS,
        }
    }

    pub fn child_age(self, age: u32) -> String {
        match (self, age) {
            (Locale::Fr, 0 | 1) => format!("{age} an"),
            (Locale::Fr, _) => format!("{age} ans"),
            (Locale::En, 1) => "1 year old".to_string(),
            (Locale::En, _) => format!("{age} years old"),
        }
    }

    /// Display name of a theme key; unknown keys are shown as stored
    pub fn theme_name(self, theme: &str) -> String {
        let name = match (self, theme) {
            (Locale::Fr, "aventure") => "Aventure",
            (Locale::Fr, "amitie") => "Amitié",
            (Locale::Fr, "courage") => "Courage",
            (Locale::Fr, "magie") => "Magie",
            (Locale::Fr, "nature") => "Nature",
            (Locale::Fr, "espace") => "Espace",
            (Locale::Fr, "mer") => "Océan",
            (Locale::Fr, "foret") => "Forêt enchantée",
            (Locale::En, "aventure") => "Adventure",
            (Locale::En, "amitie") => "Friendship",
            (Locale::En, "courage") => "Courage",
            (Locale::En, "magie") => "Magic",
            (Locale::En, "nature") => "Nature",
            (Locale::En, "espace") => "Space",
            (Locale::En, "mer") => "Ocean",
            (Locale::En, "foret") => "Enchanted forest",
            _ => return theme.to_string(),
        };
        name.to_string()
    }

    /// Display name of a story length key
    pub fn length_name(self, length: &str) -> String {
        let name = match (self, length) {
            (Locale::Fr, "short") => "Courte",
            (Locale::Fr, "medium") => "Moyenne",
            (Locale::Fr, "long") => "Longue",
            (Locale::En, "short") => "Short",
            (Locale::En, "medium") => "Medium",
            (Locale::En, "long") => "Long",
            _ => return length.to_string(),
        };
        name.to_string()
    }

    /// Short date, `15/01/2025` in French and `1/15/2025` in English
    pub fn format_date(self, date: &DateTime<Utc>) -> String {
        match self {
            Locale::Fr => date.format("%d/%m/%Y").to_string(),
            Locale::En => date.format("%-m/%-d/%Y").to_string(),
        }
    }

    /// Body text used while a story has no content
    pub fn placeholder(self) -> &'static str {
        match self {
            Locale::Fr => "Contenu en cours de préparation.",
            Locale::En => "Content pending.",
        }
    }

    /// Footer lines: dedication, creation date, attribution
    ///
    /// Always three entries; a line with nothing to say is empty so the
    /// others keep their positions.
    pub fn footer_lines(
        self,
        child_name: &str,
        created: Option<&DateTime<Utc>>,
        brand: &str,
    ) -> Vec<String> {
        let child_name = child_name.trim();
        let dedication = match (self, child_name.is_empty()) {
            (_, true) => String::new(),
            (Locale::Fr, false) => format!("Histoire personnalisée pour {child_name}"),
            (Locale::En, false) => format!("A personalized story for {child_name}"),
        };
        let created = created
            .map(|date| match self {
                Locale::Fr => format!("Créée le {}", self.format_date(date)),
                Locale::En => format!("Created on {}", self.format_date(date)),
            })
            .unwrap_or_default();
        let attribution = match self {
            Locale::Fr => format!("Généré par {brand}"),
            Locale::En => format!("Generated by {brand}"),
        };

        vec![dedication, created, attribution]
    }
}
