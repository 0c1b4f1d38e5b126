//! Prompt Export
//!
//! Single-prompt export as JSON, Markdown or XML text.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, SavedPrompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
    Xml,
}

impl ExportFormat {
    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Xml => "xml",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Xml => "application/xml",
        }
    }
}

pub fn export_prompt(prompt: &SavedPrompt, format: ExportFormat) -> DomainResult<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(prompt).map_err(|e| DomainError::Serialization(e.to_string()))
        }
        ExportFormat::Markdown => Ok(to_markdown(prompt)),
        ExportFormat::Xml => Ok(to_xml(prompt)),
    }
}

/// Suggested download name, e.g. `summarize-article.md`
pub fn export_file_name(prompt: &SavedPrompt, format: ExportFormat) -> String {
    let slug: String = prompt
        .title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let stem = if slug.is_empty() { "prompt" } else { slug.as_str() };
    format!("{}.{}", stem, format.file_extension())
}

/// A backtick fence longer than any backtick run inside `content`
fn code_fence(content: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in content.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

fn to_markdown(prompt: &SavedPrompt) -> String {
    let mut out = format!("# {}\n\n", prompt.title);
    out.push_str(&format!("- **Model:** {}\n", prompt.settings.model_type));
    out.push_str(&format!("- **Temperature:** {}\n", prompt.settings.temperature));
    if !prompt.tags.is_empty() {
        let tags: Vec<&str> = prompt.tags.iter().map(|tag| tag.name.as_str()).collect();
        out.push_str(&format!("- **Tags:** {}\n", tags.join(", ")));
    }
    out.push_str(&format!("- **Created:** {}\n\n", prompt.created_at.to_rfc3339()));

    let fence = code_fence(&prompt.content);
    out.push_str(&format!("{}\n{}\n{}\n", fence, prompt.content, fence));
    out
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn to_xml(prompt: &SavedPrompt) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!("<prompt id=\"{}\">\n", escape_xml(prompt.id.as_str())));
    out.push_str(&format!("  <title>{}</title>\n", escape_xml(&prompt.title)));
    out.push_str("  <settings>\n");
    out.push_str(&format!("    <modelType>{}</modelType>\n", escape_xml(&prompt.settings.model_type)));
    out.push_str(&format!("    <temperature>{}</temperature>\n", prompt.settings.temperature));
    out.push_str("  </settings>\n");
    out.push_str(&format!("  <createdAt>{}</createdAt>\n", prompt.created_at.to_rfc3339()));
    if let Some(folder_id) = &prompt.folder_id {
        out.push_str(&format!("  <folderId>{}</folderId>\n", escape_xml(folder_id.as_str())));
    }
    if !prompt.tags.is_empty() {
        out.push_str("  <tags>\n");
        for tag in &prompt.tags {
            out.push_str(&format!(
                "    <tag id=\"{}\" color=\"{}\">{}</tag>\n",
                escape_xml(tag.id.as_str()),
                escape_xml(&tag.color.name),
                escape_xml(&tag.name)
            ));
        }
        out.push_str("  </tags>\n");
    }
    out.push_str(&format!("  <content>{}</content>\n", escape_xml(&prompt.content)));
    out.push_str("</prompt>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FolderId, PromptId, PromptSettings, Tag, TagId};
    use crate::tagging::resolve_tag_color;
    use chrono::{TimeZone, Utc};

    fn sample_prompt() -> SavedPrompt {
        SavedPrompt {
            id: PromptId::new("p1"),
            title: "Review <code> & docs".to_string(),
            content: "Review this:\n```rust\nfn main() {}\n```".to_string(),
            settings: PromptSettings::new(0.5, "gpt-4"),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            folder_id: Some(FolderId::new("f1")),
            tags: vec![Tag::new(TagId::new("t1"), "code", resolve_tag_color("code"))],
        }
    }

    #[test]
    fn test_json_export_parses_back() {
        let prompt = sample_prompt();
        let json = export_prompt(&prompt, ExportFormat::Json).unwrap();
        let back: SavedPrompt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prompt);
    }

    #[test]
    fn test_markdown_export() {
        let md = export_prompt(&sample_prompt(), ExportFormat::Markdown).unwrap();
        assert!(md.starts_with("# Review <code> & docs\n"));
        assert!(md.contains("- **Model:** gpt-4\n"));
        assert!(md.contains("- **Tags:** code\n"));
        assert!(md.contains("- **Created:** 2024-05-01T12:00:00+00:00\n"));
        // content has a ``` run, so the fence grows
        assert!(md.contains("````\nReview this:"));
    }

    #[test]
    fn test_xml_export_escapes_text() {
        let xml = export_prompt(&sample_prompt(), ExportFormat::Xml).unwrap();
        assert!(xml.contains("<title>Review &lt;code&gt; &amp; docs</title>"));
        assert!(xml.contains("<folderId>f1</folderId>"));
        assert!(xml.contains("<tag id=\"t1\" color=\"blue\">code</tag>"));
        assert!(xml.ends_with("</prompt>\n"));
    }

    #[test]
    fn test_file_names() {
        let prompt = sample_prompt();
        assert_eq!(export_file_name(&prompt, ExportFormat::Markdown), "review-code-docs.md");

        let mut untitled = prompt;
        untitled.title = "!!!".to_string();
        assert_eq!(export_file_name(&untitled, ExportFormat::Xml), "prompt.xml");
    }

    #[test]
    fn test_code_fence_length() {
        assert_eq!(code_fence("plain"), "```");
        assert_eq!(code_fence("a ```` b"), "`````");
    }
}
