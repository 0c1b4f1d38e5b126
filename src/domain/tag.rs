//! Tag Entity
//!
//! Tags are copied into each prompt by value; renaming a tag on one prompt
//! does not touch any other prompt.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};
use super::ids::TagId;

/// Display colour of a tag: category name plus background/text style classes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagColor {
    pub name: String,
    pub bg: String,
    pub text: String,
}

impl TagColor {
    pub fn new(name: &str, bg: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            bg: bg.to_string(),
            text: text.to_string(),
        }
    }
}

/// A coloured label attached to a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: TagColor,
}

impl Tag {
    pub fn new(id: TagId, name: impl Into<String>, color: TagColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }

    /// Names must contain something besides whitespace
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("tag name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl Entity for Tag {
    type Id = TagId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
