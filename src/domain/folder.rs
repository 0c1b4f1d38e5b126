//! Folder Entity
//!
//! Folders form a forest through an optional parent reference. The parent is
//! not checked when written, so a snapshot may contain orphans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::ids::FolderId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFolder {
    pub id: FolderId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Display colour chosen by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Parent folder (None = root level)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<FolderId>,
}

impl PromptFolder {
    pub fn new(id: FolderId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
            color: None,
            parent_id: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_child_of(&self, parent: Option<&FolderId>) -> bool {
        self.parent_id.as_ref() == parent
    }
}

impl Entity for PromptFolder {
    type Id = FolderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_json_uses_camel_case() {
        let mut folder = PromptFolder::new(FolderId::new("f2"), "Drafts", Utc::now());
        folder.parent_id = Some(FolderId::new("f1"));

        let value = serde_json::to_value(&folder).unwrap();
        assert_eq!(value["parentId"], "f1");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("color").is_none());
    }

    #[test]
    fn test_reads_javascript_timestamps() {
        let json = r#"{"id":"f1","name":"Work","createdAt":"2024-03-01T10:15:30.000Z"}"#;
        let folder: PromptFolder = serde_json::from_str(json).unwrap();
        assert!(folder.is_root());
        assert_eq!(folder.created_at.to_rfc3339(), "2024-03-01T10:15:30+00:00");
    }
}
