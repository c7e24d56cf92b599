//! Forgedown Render
//!
//! HTML fragment rendering engine for forgedown. The [`Converter`]
//! consumes one raw line per call and returns one HTML fragment per
//! call (sometimes empty); the caller concatenates fragments in call
//! order.
//!
//! # Overview
//!
//! - Streaming block state machine keyed by line classification and an
//!   open-block stack; no document tree is ever built
//! - Inline expansion of emphasis, code spans, smart quotes, links, and
//!   footnotes within block-wrapped spans
//! - Series-index inclusion from an external file, degrading to an
//!   inline error marker when the file is missing
//!
//! # Example
//!
//! ```
//! use forgedown_render::Converter;
//!
//! let mut converter = Converter::new("https://example.com");
//! assert_eq!(converter.render("plain text"), "<p>plain text</p>");
//! assert_eq!(converter.render("* item one"), "<ul>\n    <li>item one</li>");
//! assert_eq!(converter.flush(), "</ul>\n");
//! ```

pub mod heading;
pub mod image;
pub mod index;
pub mod inline;
pub mod list;

pub use heading::render_heading;
pub use image::render_image;
pub use index::{render_index, MISSING_INDEX};
pub use inline::expand;

use std::path::{Path, PathBuf};

use forgedown_core::{CloseTag, LineType, ListKind, ParserState};
use forgedown_parser::{escape, observe};
use log::warn;

/// Fixed fragment emitted for horizontal-rule lines.
pub const HR_FRAGMENT: &str =
    "<hr style='margin:50px auto;width:50%;border:0;border-bottom:1px dashed #ccc;background:#999;' />";

/// Default directory searched for series-index files.
pub const DEFAULT_SYSTEM_DIR: &str = "./Content/System";

/// Streaming line-to-HTML converter.
///
/// Owns a [`ParserState`] and converts one document at a time. Calls
/// must be strictly line-ordered; at document end the caller issues a
/// final [`Converter::flush`] to close any still-open block elements.
/// Independent instances share no state, so separate documents may be
/// converted in parallel.
#[derive(Debug, Clone)]
pub struct Converter {
    state: ParserState,
    system_dir: PathBuf,
}

impl Converter {
    /// Create a converter with the given base URL and the default
    /// series-index directory.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_system_dir(base_url, DEFAULT_SYSTEM_DIR)
    }

    /// Create a converter reading series-index files from `system_dir`.
    pub fn with_system_dir(base_url: impl Into<String>, system_dir: impl Into<PathBuf>) -> Self {
        Self {
            state: ParserState::new(base_url),
            system_dir: system_dir.into(),
        }
    }

    /// The underlying parse state.
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// The directory searched for series-index files.
    pub fn system_dir(&self) -> &Path {
        &self.system_dir
    }

    /// Convert one raw line into an HTML fragment.
    pub fn render(&mut self, line: &str) -> String {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let kind = observe(&mut self.state, line);

        // The toggle line itself carries only the pre tag; everything
        // between the fences is escaped but otherwise untouched.
        if kind == LineType::Pre {
            return if self.state.preformatted {
                "<pre>".to_string()
            } else {
                "</pre>".to_string()
            };
        }
        if self.state.preformatted {
            return escape(line);
        }
        if kind == LineType::Raw {
            return line.to_string();
        }

        let text = escape(line.trim_start_matches(' '));

        if kind == LineType::Blank {
            return self.state.close_out.flush();
        }

        match kind {
            LineType::UlOpen => self.open_list(ListKind::Unordered, &text),
            LineType::OlOpen => self.open_list(ListKind::Ordered, &text),
            LineType::UlClose => self.close_list(ListKind::Unordered, &text),
            LineType::OlClose => self.close_list(ListKind::Ordered, &text),
            LineType::Item => list::item_fragment(&self.item_content(&text)),
            LineType::QuoteOpen => {
                let fragment = format!(
                    "<blockquote>\n    <p>{}</p>",
                    self.expand(quote_content(&text))
                );
                self.state.close_out.push(CloseTag::Blockquote);
                fragment
            }
            LineType::QuoteCont => {
                let content = quote_content(&text);
                if content.is_empty() {
                    // Acts as an in-quote paragraph separator.
                    String::new()
                } else {
                    format!("    <p>{}</p>", self.expand(content))
                }
            }
            LineType::Header => render_heading(&text),
            LineType::Rule => HR_FRAGMENT.to_string(),
            LineType::Image => render_image(&text, &self.state.base_url),
            LineType::Index => render_index(&text, &self.system_dir),
            LineType::Footnote => self.footnote_fragment(&text),
            _ => self.paragraph_fragment(&text),
        }
    }

    /// Close any still-open block elements.
    ///
    /// Equivalent to rendering a synthetic blank line; call once at
    /// document end.
    pub fn flush(&mut self) -> String {
        self.render("")
    }

    /// Clear all trackers for reuse on another document. The base URL
    /// and series-index directory are retained.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// One of the last three raw lines, verbatim; `0` is the current
    /// line.
    pub fn raw_at(&self, n: usize) -> Option<&str> {
        self.state.raw_at(n)
    }

    fn expand(&self, content: &str) -> String {
        inline::expand(content, &self.state.base_url)
    }

    /// Inline-expanded item text with the marker stripped. Trailing
    /// spaces are dropped first so the break rule cannot fire inside a
    /// list item.
    fn item_content(&self, text: &str) -> String {
        self.expand(list::strip_marker(text).trim_end_matches(' '))
    }

    fn open_list(&mut self, kind: ListKind, text: &str) -> String {
        let fragment = list::open_fragment(kind, &self.item_content(text));
        self.state.close_out.push(kind.close_tag());
        fragment
    }

    fn close_list(&mut self, kind: ListKind, text: &str) -> String {
        let fragment = list::close_fragment(kind, &self.item_content(text));
        let removed = self.state.close_out.remove(kind.close_tag());
        debug_assert!(removed, "{} close without matching open", kind);
        if !removed {
            warn!("{} close with no matching open entry; output left as-is", kind);
        }
        fragment
    }

    fn footnote_fragment(&self, text: &str) -> String {
        let rest = text.strip_prefix("[&gt;").unwrap_or(text);
        let (mark, remainder) = rest.split_once(']').unwrap_or((rest, ""));
        let remainder = remainder.strip_prefix(' ').unwrap_or(remainder);
        format!(
            "<p id='fn{mark}'><a class='fn' title='return to article' \
             href='#fnref{mark}'>&#x21a9;</a>&nbsp;{}</p>",
            self.expand(remainder)
        )
    }

    fn paragraph_fragment(&self, text: &str) -> String {
        // Three or more trailing spaces append an explicit break after
        // the paragraph, checked before the span is trimmed.
        if text.ends_with("   ") {
            format!("<p>{}</p>\n\n<br />", self.expand(text.trim_end_matches(' ')))
        } else {
            format!("<p>{}</p>", self.expand(text))
        }
    }
}

/// Blockquote content: everything after the escaped `>` marker and one
/// optional following space.
fn quote_content(text: &str) -> &str {
    let rest = text.strip_prefix("&gt;").unwrap_or(text);
    rest.strip_prefix(' ').unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() {
        let mut converter = Converter::new("");
        assert_eq!(converter.render("just a line"), "<p>just a line</p>");
    }

    #[test]
    fn test_paragraph_with_trailing_break() {
        let mut converter = Converter::new("");
        assert_eq!(
            converter.render("line one   "),
            "<p>line one</p>\n\n<br />"
        );
    }

    #[test]
    fn test_list_open_then_item() {
        let mut converter = Converter::new("");
        assert_eq!(
            converter.render("* item one"),
            "<ul>\n    <li>item one</li>"
        );
        assert_eq!(converter.render("* item two"), "    <li>item two</li>");
    }

    #[test]
    fn test_nested_list_close_folds_into_item() {
        let mut converter = Converter::new("");
        converter.render("* outer");
        converter.render("    * inner");
        assert_eq!(converter.render("* outer again"), "</ul>\n<li>outer again</li>");
        assert_eq!(converter.flush(), "</ul>\n");
    }

    #[test]
    fn test_ordered_list() {
        let mut converter = Converter::new("");
        assert_eq!(converter.render("1. first"), "<ol>\n    <li>first</li>");
        assert_eq!(converter.render("2. second"), "    <li>second</li>");
        assert_eq!(converter.flush(), "</ol>\n");
    }

    #[test]
    fn test_blank_closes_blocks_and_clears() {
        let mut converter = Converter::new("");
        converter.render("* item");
        assert_eq!(converter.render(""), "</ul>\n");
        assert_eq!(converter.render(""), "");
        assert_eq!(converter.render("back to prose"), "<p>back to prose</p>");
    }

    #[test]
    fn test_blockquote_open_and_continuation() {
        let mut converter = Converter::new("");
        assert_eq!(
            converter.render("> first line"),
            "<blockquote>\n    <p>first line</p>"
        );
        assert_eq!(converter.render("> second"), "    <p>second</p>");
        assert_eq!(converter.render(">"), "");
        assert_eq!(converter.flush(), "</blockquote>\n");
    }

    #[test]
    fn test_preformatted_block() {
        let mut converter = Converter::new("");
        assert_eq!(converter.render("```"), "<pre>");
        assert_eq!(converter.render("let x = a < b;"), "let x = a &lt; b;");
        assert_eq!(converter.render("**not bold**"), "**not bold**");
        assert_eq!(converter.render("```"), "</pre>");
    }

    #[test]
    fn test_pre_tag_block() {
        let mut converter = Converter::new("");
        assert_eq!(converter.render("<pre>"), "<pre>");
        assert_eq!(converter.render("</pre>"), "</pre>");
    }

    #[test]
    fn test_raw_html_passthrough() {
        let mut converter = Converter::new("");
        assert_eq!(
            converter.render("<table class=\"wide\">"),
            "<table class=\"wide\">"
        );
    }

    #[test]
    fn test_header_not_inline_expanded() {
        let mut converter = Converter::new("");
        let html = converter.render("# Hello *world*");
        assert!(html.contains("Hello *world*"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn test_horizontal_rule() {
        let mut converter = Converter::new("");
        assert_eq!(converter.render("---"), HR_FRAGMENT);
    }

    #[test]
    fn test_footnote_backreference() {
        let mut converter = Converter::new("");
        assert_eq!(
            converter.render("[>2] The cited work."),
            "<p id='fn2'><a class='fn' title='return to article' \
             href='#fnref2'>&#x21a9;</a>&nbsp;The cited work.</p>"
        );
    }

    #[test]
    fn test_footnote_multi_digit_mark() {
        let mut converter = Converter::new("");
        let html = converter.render("[>12] Later note.");
        assert!(html.contains("id='fn12'"));
        assert!(html.contains("href='#fnref12'"));
    }

    #[test]
    fn test_series_index_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut converter = Converter::with_system_dir("", dir.path());
        assert_eq!(converter.render("{absent.txt}"), MISSING_INDEX);
        // Conversion continues after the marker.
        assert_eq!(converter.render("still here"), "<p>still here</p>");
    }

    #[test]
    fn test_series_index_expansion() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("series.txt"),
            "<a href=\"/blog/one.html\">One</a>\n",
        )
        .unwrap();
        let mut converter = Converter::with_system_dir("", dir.path());
        let html = converter.render("{series.txt}");
        assert!(html.starts_with("<ul style=\"border:1px dashed gray\" id=\"series_index\">"));
        assert!(html.contains("<li><a href=\"/blog/one.html\">One</a></li>"));
        assert!(html.ends_with("</ul>"));
    }

    #[test]
    fn test_image_line_not_inline_expanded() {
        let mut converter = Converter::new("https://x.test");
        let html = converter.render("![A *starry* night](https://cdn.example/n.png)");
        assert!(html.contains("title='A *starry* night'"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn test_reset_matches_fresh_instance() {
        let mut reused = Converter::new("https://x.test");
        reused.render("* one");
        reused.render("> quote");
        reused.flush();
        reused.reset();

        let mut fresh = Converter::new("https://x.test");
        assert_eq!(reused.render("* one"), fresh.render("* one"));
        assert_eq!(reused.render("* two"), fresh.render("* two"));
    }

    #[test]
    fn test_raw_at() {
        let mut converter = Converter::new("");
        converter.render("first");
        converter.render("second");
        assert_eq!(converter.raw_at(0), Some("second"));
        assert_eq!(converter.raw_at(1), Some("first"));
        assert_eq!(converter.raw_at(3), None);
    }

    #[test]
    fn test_mismatched_close_does_not_panic_in_release() {
        // An ordered close with only unordered lists open is a
        // content-authoring defect; release builds must not corrupt
        // surrounding output.
        if cfg!(debug_assertions) {
            return;
        }
        let mut converter = Converter::new("");
        converter.render("* outer");
        converter.render("    * inner");
        let _ = converter.render("1. stray ordered close");
        let _ = converter.flush();
        assert_eq!(converter.render("after"), "<p>after</p>");
    }
}
