//! List fragment assembly.
//!
//! Builds the per-line HTML for list structures. Opening a list emits
//! the wrapper and first item together; closing a nested list folds the
//! wrapper-close into the next item's fragment, so the caller never has
//! to look ahead.

use forgedown_core::ListKind;

/// Wrapper element name for a list kind.
fn wrapper(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Unordered => "ul",
        ListKind::Ordered => "ol",
    }
}

/// Fragment opening a new list: wrapper plus first item.
pub fn open_fragment(kind: ListKind, content: &str) -> String {
    format!("<{w}>\n    <li>{content}</li>", w = wrapper(kind))
}

/// Fragment for a continuation item.
pub fn item_fragment(content: &str) -> String {
    format!("    <li>{content}</li>")
}

/// Fragment closing a nested list and opening the next outer item.
pub fn close_fragment(kind: ListKind, content: &str) -> String {
    format!("</{w}>\n<li>{content}</li>", w = wrapper(kind))
}

/// Strip the list marker from an escaped, de-indented line.
///
/// Ordered markers run through the first `". "`; bullet markers are the
/// two characters `X `.
pub fn strip_marker(line: &str) -> &str {
    if line.as_bytes().first().is_some_and(|b| b.is_ascii_digit()) {
        line.split_once(". ").map_or("", |(_, rest)| rest)
    } else {
        line.get(2..).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_fragment() {
        assert_eq!(
            open_fragment(ListKind::Unordered, "item one"),
            "<ul>\n    <li>item one</li>"
        );
        assert_eq!(
            open_fragment(ListKind::Ordered, "first"),
            "<ol>\n    <li>first</li>"
        );
    }

    #[test]
    fn test_item_fragment_keeps_indent() {
        assert_eq!(item_fragment("item two"), "    <li>item two</li>");
    }

    #[test]
    fn test_close_fragment_folds_next_item() {
        assert_eq!(
            close_fragment(ListKind::Unordered, "outer again"),
            "</ul>\n<li>outer again</li>"
        );
        assert_eq!(
            close_fragment(ListKind::Ordered, "back"),
            "</ol>\n<li>back</li>"
        );
    }

    #[test]
    fn test_strip_bullet_marker() {
        assert_eq!(strip_marker("* item"), "item");
        assert_eq!(strip_marker("- item"), "item");
        assert_eq!(strip_marker("+ item"), "item");
    }

    #[test]
    fn test_strip_ordered_marker() {
        assert_eq!(strip_marker("1. first"), "first");
        assert_eq!(strip_marker("12. twelfth"), "twelfth");
    }

    #[test]
    fn test_ordered_marker_without_space_yields_empty() {
        assert_eq!(strip_marker("1.first"), "");
    }

    #[test]
    fn test_bare_marker() {
        assert_eq!(strip_marker("* "), "");
    }
}
