//! Saved Prompt Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use super::entity::{DomainError, DomainResult, Entity};
use super::ids::{FolderId, PromptId};
use super::tag::Tag;

pub const DEFAULT_MODEL_TYPE: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Generation settings stored with a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSettings {
    /// Sampling temperature in [0, 1]
    pub temperature: f64,
    pub model_type: String,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            model_type: DEFAULT_MODEL_TYPE.to_string(),
        }
    }
}

impl PromptSettings {
    pub fn new(temperature: f64, model_type: impl Into<String>) -> Self {
        Self {
            temperature,
            model_type: model_type.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.temperature.is_finite() || !(0.0..=1.0).contains(&self.temperature) {
            return Err(DomainError::InvalidInput(format!(
                "temperature must be within [0, 1], got {}",
                self.temperature
            )));
        }
        if self.model_type.trim().is_empty() {
            return Err(DomainError::InvalidInput("model type must not be empty".to_string()));
        }
        Ok(())
    }
}

/// A prompt persisted in the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPrompt {
    pub id: PromptId,
    pub title: String,
    pub content: String,
    pub settings: PromptSettings,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<FolderId>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Older snapshots may carry `"tags": null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Tag>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SavedPrompt {
    pub fn has_tag_named(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.has_name(name))
    }

    /// Case-insensitive match on title, content or any tag name
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query)
            || self.tags.iter().any(|tag| tag.name.to_lowercase().contains(&query))
    }
}

impl Entity for SavedPrompt {
    type Id = PromptId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for saving a new prompt
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPrompt {
    pub title: String,
    pub content: String,
    pub settings: PromptSettings,
    pub folder_id: Option<FolderId>,
    pub tags: Vec<Tag>,
}

impl NewPrompt {
    pub fn new(title: impl Into<String>, content: impl Into<String>, settings: PromptSettings) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            settings,
            folder_id: None,
            tags: Vec::new(),
        }
    }

    pub fn in_folder(mut self, folder_id: FolderId) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }
}

/// Whole-field replacement of a prompt's editable text and settings
#[derive(Debug, Clone, PartialEq)]
pub struct PromptEdit {
    pub title: String,
    pub content: String,
    pub settings: PromptSettings,
}
