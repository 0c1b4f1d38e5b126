//! Library Configuration
//!
//! Storage keys and suggestion limits. The defaults match the layout written
//! by earlier versions of the app, so existing browser data keeps loading.

use serde::{Deserialize, Serialize};

pub const PROMPTS_KEY: &str = "aiknowledge_prompts";
pub const FOLDERS_KEY: &str = "aiknowledge_folders";

/// Limits applied by the tag suggestion engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestionConfig {
    /// Maximum number of suggested tags
    pub max_tags: usize,
    /// Shortest keyword (in characters) considered
    pub min_token_len: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_tags: 5,
            min_token_len: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LibraryConfig {
    pub prompts_key: String,
    pub folders_key: String,
    pub suggestion: SuggestionConfig,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            prompts_key: PROMPTS_KEY.to_string(),
            folders_key: FOLDERS_KEY.to_string(),
            suggestion: SuggestionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: LibraryConfig = serde_json::from_str(r#"{"promptsKey":"test_prompts"}"#).unwrap();
        assert_eq!(config.prompts_key, "test_prompts");
        assert_eq!(config.folders_key, FOLDERS_KEY);
        assert_eq!(config.suggestion.max_tags, 5);
    }
}
