//! Prompt Library
//!
//! Saved prompts, nested folders and coloured tags, persisted to browser
//! local storage.
//!
//! Layers:
//! - domain: entities and the shared error type
//! - tagging: colour assignment and keyword tag suggestions
//! - repository: storage capabilities and snapshot persistence
//! - library: folder tree, prompt store and the façade tying them to storage
//! - export / preview / tree: read-only views over prompts and folders
//! - context: Leptos integration

pub mod config;
pub mod domain;
pub mod tagging;
pub mod repository;
pub mod library;
pub mod tree;
pub mod export;
pub mod preview;
pub mod context;

pub use config::{LibraryConfig, SuggestionConfig};
pub use domain::{
    DomainError, DomainResult, FolderId, NewPrompt, PromptEdit, PromptFolder, PromptId, PromptSettings,
    SavedPrompt, Tag, TagColor, TagId,
};
pub use library::{FolderDeletion, PromptLibrary};
