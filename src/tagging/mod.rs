//! Tagging
//!
//! Colour assignment and keyword-based tag suggestions.

mod color;
mod suggest;

pub use color::{palette, resolve_tag_color};
pub use suggest::{extract_keywords, merge_tags, suggest_tags};
