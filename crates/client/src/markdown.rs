//! Lightweight markup detection and rendering for note content.
//!
//! Content is stored verbatim; markup only affects how a card shows it.

use std::sync::LazyLock;

use pulldown_cmark::{html, Options, Parser};
use regex::RegexSet;

/// Heuristics for "this looks like markdown".
static MARKDOWN_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?m)^#{1,6}\s",    // headings
        r"\*\*.*\*\*",       // bold
        r"\*.*\*",           // italic
        r"`.*`",             // inline code
        r"```[\s\S]*```",    // fenced code
        r"(?m)^\s*[-*+]\s",  // bullet lists
        r"(?m)^\s*\d+\.\s",  // numbered lists
        r"\[.*\]\(.*\)",     // links
        r"(?m)^\s*>",        // blockquotes
    ])
    .expect("markdown patterns are valid")
});

/// Whether `content` appears to contain markdown syntax.
pub fn has_markdown_syntax(content: &str) -> bool {
    MARKDOWN_PATTERNS.is_match(content)
}

/// Render markdown content to HTML.
pub fn render_html(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options);
    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
