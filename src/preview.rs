//! Prompt Preview
//!
//! Renders prompt text as Markdown for the preview pane:
//! - tables, strikethrough and task lists
//! - syntax highlighting (syntect) for fenced blocks with a known language

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get("InspiredGitHub")
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

/// Render prompt content to HTML
pub fn render_preview(content: &str) -> String {
    let parser = Parser::new_ext(content, get_options());
    let events = highlight_code_blocks(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

/// Replace code block events with pre-rendered HTML
fn highlight_code_blocks(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match &mut state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.trim().is_empty() => Some(lang.trim().to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                other => events.push(other),
            },
            State::InCodeBlock { lang, content } => match event {
                Event::Text(text) => content.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    let html = render_code_block(lang.as_deref(), content);
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn render_code_block(lang: Option<&str>, code: &str) -> String {
    let syntax_set = get_syntax_set();
    let highlighted = lang
        .and_then(|lang| syntax_set.find_syntax_by_token(lang))
        .zip(get_theme())
        .and_then(|(syntax, theme)| highlighted_html_for_string(code, syntax_set, syntax, theme).ok());

    match highlighted {
        Some(html) => html,
        None => format!("<pre><code>{}</code></pre>\n", escape_html(code)),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
