//! Prompt Library
//!
//! Owns the folder tree, the prompt store and the storage they are mirrored
//! to. Build one at startup with `open`, share it, and `flush` on teardown.
//! Every successful mutation rewrites the affected collection before
//! returning, so storage always holds the state of the last completed call.

mod folder_tree;
mod prompt_store;


pub use folder_tree::FolderTree;
pub use prompt_store::PromptStore;

use chrono::Utc;

use crate::config::LibraryConfig;
use crate::domain::{
    DomainError, DomainResult, FolderId, NewPrompt, PromptEdit, PromptFolder, PromptId, SavedPrompt, Tag, TagId,
};
use crate::repository::{load_collection, save_collection, IdGenerator, KeyValueStorage};
use crate::tagging;

/// What a folder deletion removed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderDeletion {
    pub folders: Vec<FolderId>,
    pub prompts: Vec<PromptId>,
}

pub struct PromptLibrary<S, G> {
    config: LibraryConfig,
    storage: S,
    ids: G,
    folders: FolderTree,
    prompts: PromptStore,
}

impl<S: KeyValueStorage, G: IdGenerator> PromptLibrary<S, G> {
    /// Load both collections from `storage`; missing or corrupt snapshots
    /// start empty.
    pub fn open(storage: S, ids: G, config: LibraryConfig) -> Self {
        let folders = FolderTree::from_folders(load_collection(&storage, &config.folders_key));
        let prompts = PromptStore::from_prompts(load_collection(&storage, &config.prompts_key));
        log::info!(
            "Prompt library opened: {} folders, {} prompts",
            folders.len(),
            prompts.len()
        );

        Self {
            config,
            storage,
            ids,
            folders,
            prompts,
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn folders(&self) -> &FolderTree {
        &self.folders
    }

    pub fn prompts(&self) -> &PromptStore {
        &self.prompts
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage and id generator
    pub fn into_parts(self) -> (S, G) {
        (self.storage, self.ids)
    }

    /// Rewrite both collections
    pub fn flush(&mut self) -> DomainResult<()> {
        self.persist_folders()?;
        self.persist_prompts()
    }

    fn persist_folders(&mut self) -> DomainResult<()> {
        save_collection(&mut self.storage, &self.config.folders_key, self.folders.all()).map_err(|e| {
            log::error!("Failed to persist folders: {}", e);
            e
        })
    }

    fn persist_prompts(&mut self) -> DomainResult<()> {
        save_collection(&mut self.storage, &self.config.prompts_key, self.prompts.all()).map_err(|e| {
            log::error!("Failed to persist prompts: {}", e);
            e
        })
    }

    // ========================
    // Folders
    // ========================

    pub fn create_folder(
        &mut self,
        name: &str,
        color: Option<String>,
        parent_id: Option<FolderId>,
    ) -> DomainResult<PromptFolder> {
        let id = FolderId::new(self.ids.next_id());
        let folder = self.folders.create(id, name, color, parent_id, Utc::now())?;
        log::debug!("Created folder {} ({})", folder.id, folder.name);
        self.persist_folders()?;
        Ok(folder)
    }

    pub fn rename_folder(&mut self, id: &FolderId, new_name: &str) -> DomainResult<()> {
        self.folders.rename(id, new_name)?;
        log::debug!("Renamed folder {}", id);
        self.persist_folders()
    }

    pub fn recolor_folder(&mut self, id: &FolderId, color: Option<String>) -> DomainResult<()> {
        self.folders.recolor(id, color)?;
        self.persist_folders()
    }

    /// Delete a folder, its whole subtree and every prompt filed in them
    pub fn delete_folder(&mut self, id: &FolderId) -> DomainResult<FolderDeletion> {
        let folders = self.folders.delete(id)?;
        let prompts = self.prompts.remove_in_folders(&folders);
        log::debug!(
            "Deleted folder {}: {} folders, {} prompts removed",
            id,
            folders.len(),
            prompts.len()
        );

        self.persist_folders()?;
        if !prompts.is_empty() {
            self.persist_prompts()?;
        }
        Ok(FolderDeletion { folders, prompts })
    }

    // ========================
    // Prompts
    // ========================

    pub fn save_prompt(&mut self, new: NewPrompt) -> DomainResult<SavedPrompt> {
        let id = PromptId::new(self.ids.next_id());
        let prompt = self.prompts.save(id, new, Utc::now())?;
        log::debug!("Saved prompt {} ({})", prompt.id, prompt.title);
        self.persist_prompts()?;
        Ok(prompt)
    }

    pub fn update_prompt(&mut self, id: &PromptId, edit: PromptEdit) -> DomainResult<()> {
        self.prompts.update(id, edit)?;
        self.persist_prompts()
    }

    pub fn delete_prompt(&mut self, id: &PromptId) -> DomainResult<SavedPrompt> {
        let prompt = self.prompts.delete(id)?;
        log::debug!("Deleted prompt {}", id);
        self.persist_prompts()?;
        Ok(prompt)
    }

    pub fn move_prompt(&mut self, id: &PromptId, folder_id: Option<FolderId>) -> DomainResult<()> {
        self.prompts.move_to(id, folder_id)?;
        self.persist_prompts()
    }

    pub fn add_tag(&mut self, id: &PromptId, tag: Tag) -> DomainResult<bool> {
        let added = self.prompts.add_tag(id, tag)?;
        if added {
            self.persist_prompts()?;
        }
        Ok(added)
    }

    pub fn remove_tag(&mut self, id: &PromptId, tag_id: &TagId) -> DomainResult<bool> {
        let removed = self.prompts.remove_tag(id, tag_id)?;
        if removed {
            self.persist_prompts()?;
        }
        Ok(removed)
    }

    // ========================
    // Tagging
    // ========================

    /// Tag suggestions for `content`, with fresh ids
    pub fn suggest_tags(&mut self, content: &str) -> Vec<Tag> {
        tagging::suggest_tags(content, &mut self.ids, &self.config.suggestion)
    }

    /// A new tag coloured by name. Blank names are rejected.
    pub fn new_tag(&mut self, name: &str) -> DomainResult<Tag> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("tag name must not be empty".to_string()));
        }
        Ok(Tag::new(TagId::new(self.ids.next_id()), name, tagging::resolve_tag_color(name)))
    }
}
