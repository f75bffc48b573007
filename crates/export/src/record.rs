//! Story records as stored by the application

use crate::{ExportError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a story whose generation has finished
pub const COMPLETED_STATUS: &str = "completed";

/// A row of the `stories` table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoryRecord {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub child_name: String,

    #[serde(default)]
    pub child_age: Option<u32>,

    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub characters: Option<Vec<String>>,

    /// Story text, present once generation has finished
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// One of `short`, `medium`, `long`
    #[serde(default)]
    pub story_length: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub illustration_urls: Option<Vec<String>>,
}

impl StoryRecord {
    /// Whether generation has finished and produced text
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(COMPLETED_STATUS) && self.has_content()
    }

    pub fn has_content(&self) -> bool {
        self.content
            .as_deref()
            .is_some_and(|content| !content.trim().is_empty())
    }

    /// Character names joined for display, `None` when there are none
    pub fn characters_line(&self) -> Option<String> {
        let names: Vec<&str> = self
            .characters
            .iter()
            .flatten()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            None
        } else {
            Some(names.join(", "))
        }
    }
}

/// Parse a story record from JSON
pub fn parse_story(json: &str) -> Result<StoryRecord> {
    serde_json::from_str(json).map_err(|e| ExportError::ParseError(e.to_string()))
}
