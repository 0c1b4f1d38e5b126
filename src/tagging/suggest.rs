//! Tag Suggestion Engine
//!
//! Proposes tags from the words of a prompt. Every call mints fresh tag ids,
//! so suggestions for the same text never share identity with tags created
//! earlier; merge by name with `merge_tags`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::SuggestionConfig;
use crate::domain::{Tag, TagId};
use crate::repository::IdGenerator;
use super::color::resolve_tag_color;

static WORD_SPLIT: OnceLock<Regex> = OnceLock::new();

fn word_split() -> &'static Regex {
    WORD_SPLIT.get_or_init(|| Regex::new(r"\W+").expect("word split pattern is valid"))
}

/// Common words that make poor tags
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "also", "because", "been", "before",
    "being", "below", "between", "both", "could", "does", "doing", "down", "during", "each",
    "from", "further", "have", "having", "here", "into", "just", "like", "make", "more",
    "most", "must", "need", "only", "other", "over", "please", "same", "should", "some",
    "such", "than", "that", "their", "theirs", "them", "then", "there", "these", "they",
    "this", "those", "through", "under", "until", "very", "want", "were", "what", "when",
    "where", "which", "while", "will", "with", "would", "your", "yours",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Distinct lower-cased keywords of `content`, in first-seen order
pub fn extract_keywords(content: &str, config: &SuggestionConfig) -> Vec<String> {
    let lower = content.to_lowercase();
    let mut seen = HashSet::new();

    word_split()
        .split(&lower)
        .filter(|token| token.chars().count() >= config.min_token_len)
        .filter(|token| !is_stop_word(token))
        .filter(|token| seen.insert(*token))
        .take(config.max_tags)
        .map(str::to_string)
        .collect()
}

/// Suggested tags for `content`, at most `config.max_tags` of them
pub fn suggest_tags<G>(content: &str, ids: &mut G, config: &SuggestionConfig) -> Vec<Tag>
where
    G: IdGenerator + ?Sized,
{
    extract_keywords(content, config)
        .into_iter()
        .map(|name| {
            let color = resolve_tag_color(&name);
            Tag::new(TagId::new(ids.next_id()), name, color)
        })
        .collect()
}

/// Append the suggestions whose names are not already selected
pub fn merge_tags(selected: &[Tag], suggested: Vec<Tag>) -> Vec<Tag> {
    let mut merged = selected.to_vec();
    for tag in suggested {
        if !merged.iter().any(|existing| existing.has_name(&tag.name)) {
            merged.push(tag);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SequentialIds;

    fn suggest(content: &str) -> Vec<Tag> {
        suggest_tags(content, &mut SequentialIds::new("t"), &SuggestionConfig::default())
    }

    fn names(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(suggest("").is_empty());
        assert!(suggest("   \n\t ").is_empty());
    }

    #[test]
    fn test_stop_words_and_short_tokens() {
        assert!(suggest("the and or but").is_empty());
        assert!(suggest("this that with from").is_empty());
    }

    #[test]
    fn test_keywords_in_first_seen_order() {
        let tags = suggest("Write a creative story about dragons. Creative STORY, dragons!");
        assert_eq!(names(&tags), vec!["write", "creative", "story", "dragons"]);
    }

    #[test]
    fn test_capped_at_five() {
        let tags = suggest("alpha bravo charlie delta echo foxtrot golf hotel");
        assert_eq!(tags.len(), 5);
        assert_eq!(names(&tags), vec!["alpha", "bravo", "charlie", "delta", "echo"]);
    }

    #[test]
    fn test_color_matches_resolver() {
        for tag in suggest("Generate marketing copy for a data science course") {
            assert_eq!(tag.color, resolve_tag_color(&tag.name));
        }
    }

    #[test]
    fn test_non_ascii_words_count_characters() {
        let tags = suggest("résumé café naïveté");
        assert_eq!(names(&tags), vec!["résumé", "café", "naïveté"]);
    }

    #[test]
    fn test_each_call_mints_new_ids() {
        let mut ids = SequentialIds::new("t");
        let config = SuggestionConfig::default();
        let first = suggest_tags("python testing", &mut ids, &config);
        let second = suggest_tags("python testing", &mut ids, &config);

        assert_eq!(names(&first), names(&second));
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn test_merge_by_name() {
        let mut ids = SequentialIds::new("t");
        let config = SuggestionConfig::default();
        let selected = suggest_tags("python", &mut ids, &config);
        let suggested = suggest_tags("Python debugging", &mut ids, &config);

        let merged = merge_tags(&selected, suggested);
        assert_eq!(names(&merged), vec!["python", "debugging"]);
        assert_eq!(merged[0].id, selected[0].id);
    }

    #[test]
    fn test_custom_limits() {
        let config = SuggestionConfig { max_tags: 2, min_token_len: 3 };
        let keywords = extract_keywords("sql api rest graphql", &config);
        assert_eq!(keywords, vec!["sql", "api"]);
    }
}
