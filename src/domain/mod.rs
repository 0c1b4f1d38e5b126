//! Domain Layer
//!
//! Entities of the prompt library and the error type shared by every layer.
//! No storage or UI concerns live here.

mod entity;
mod ids;
mod tag;
mod folder;
mod prompt;

pub use entity::{index_of, DomainError, DomainResult, Entity};
pub use ids::{FolderId, PromptId, TagId};
pub use tag::{Tag, TagColor};
pub use folder::PromptFolder;
pub use prompt::{NewPrompt, PromptEdit, PromptSettings, SavedPrompt};
