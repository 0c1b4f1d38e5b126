//! Prompt Store
//!
//! Saved prompts with their folder assignment and tags.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::{
    index_of, DomainError, DomainResult, FolderId, NewPrompt, PromptEdit, PromptId, SavedPrompt, Tag, TagId,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptStore {
    prompts: Vec<SavedPrompt>,
}

fn not_found(id: &PromptId) -> DomainError {
    DomainError::NotFound(format!("prompt {}", id))
}

/// Drop later tags whose name repeats an earlier one
fn dedup_by_name(tags: Vec<Tag>) -> Vec<Tag> {
    let mut kept: Vec<Tag> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !kept.iter().any(|existing| existing.has_name(&tag.name)) {
            kept.push(tag);
        }
    }
    kept
}

impl PromptStore {
    pub fn from_prompts(prompts: Vec<SavedPrompt>) -> Self {
        Self { prompts }
    }

    pub fn all(&self) -> &[SavedPrompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn get(&self, id: &PromptId) -> Option<&SavedPrompt> {
        self.prompts.iter().find(|prompt| &prompt.id == id)
    }

    fn get_mut(&mut self, id: &PromptId) -> DomainResult<&mut SavedPrompt> {
        let index = index_of(&self.prompts, id).ok_or_else(|| not_found(id))?;
        Ok(&mut self.prompts[index])
    }

    /// Append a prompt. Titles are not required to be unique.
    pub fn save(&mut self, id: PromptId, new: NewPrompt, created_at: DateTime<Utc>) -> DomainResult<SavedPrompt> {
        new.settings.validate()?;
        for tag in &new.tags {
            tag.validate()?;
        }

        let prompt = SavedPrompt {
            id,
            title: new.title,
            content: new.content,
            settings: new.settings,
            created_at,
            folder_id: new.folder_id,
            tags: dedup_by_name(new.tags),
        };
        self.prompts.push(prompt.clone());
        Ok(prompt)
    }

    pub fn update(&mut self, id: &PromptId, edit: PromptEdit) -> DomainResult<()> {
        edit.settings.validate()?;

        let prompt = self.get_mut(id)?;
        prompt.title = edit.title;
        prompt.content = edit.content;
        prompt.settings = edit.settings;
        Ok(())
    }

    pub fn delete(&mut self, id: &PromptId) -> DomainResult<SavedPrompt> {
        let index = index_of(&self.prompts, id).ok_or_else(|| not_found(id))?;
        Ok(self.prompts.remove(index))
    }

    /// Reassign (or clear) the folder. The folder is not required to exist.
    pub fn move_to(&mut self, id: &PromptId, folder_id: Option<FolderId>) -> DomainResult<()> {
        self.get_mut(id)?.folder_id = folder_id;
        Ok(())
    }

    /// Returns `false` when a tag with the same name (any case) is already attached
    pub fn add_tag(&mut self, id: &PromptId, tag: Tag) -> DomainResult<bool> {
        tag.validate()?;
        let prompt = self.get_mut(id)?;
        if prompt.has_tag_named(&tag.name) {
            return Ok(false);
        }
        prompt.tags.push(tag);
        Ok(true)
    }

    /// Returns `false` when the tag is not attached
    pub fn remove_tag(&mut self, id: &PromptId, tag_id: &TagId) -> DomainResult<bool> {
        let prompt = self.get_mut(id)?;
        let before = prompt.tags.len();
        prompt.tags.retain(|tag| &tag.id != tag_id);
        Ok(prompt.tags.len() != before)
    }

    /// Remove every prompt filed in one of `folder_ids`
    pub fn remove_in_folders(&mut self, folder_ids: &[FolderId]) -> Vec<PromptId> {
        let folders: HashSet<&FolderId> = folder_ids.iter().collect();
        let mut removed = Vec::new();
        self.prompts.retain(|prompt| match &prompt.folder_id {
            Some(folder) if folders.contains(folder) => {
                removed.push(prompt.id.clone());
                false
            }
            _ => true,
        });
        removed
    }

    /// Prompts filed directly in `folder` (unfiled prompts for `None`)
    pub fn in_folder(&self, folder: Option<&FolderId>) -> Vec<&SavedPrompt> {
        self.prompts
            .iter()
            .filter(|prompt| prompt.folder_id.as_ref() == folder)
            .collect()
    }

    pub fn with_tag(&self, name: &str) -> Vec<&SavedPrompt> {
        self.prompts
            .iter()
            .filter(|prompt| prompt.has_tag_named(name))
            .collect()
    }

    /// Case-insensitive search over titles, contents and tag names
    pub fn search(&self, query: &str) -> Vec<&SavedPrompt> {
        let query = query.trim();
        if query.is_empty() {
            return self.prompts.iter().collect();
        }
        self.prompts.iter().filter(|prompt| prompt.matches(query)).collect()
    }

    /// Distinct tag names across all prompts, first-seen order
    pub fn all_tag_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.prompts
            .iter()
            .flat_map(|prompt| prompt.tags.iter())
            .filter(|tag| seen.insert(tag.name.to_lowercase()))
            .map(|tag| tag.name.clone())
            .collect()
    }
}
