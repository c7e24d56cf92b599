//! Line classification.
//!
//! Assigns a [`LineType`] to each incoming line using the line text,
//! the preformatted-mode flag, and the bounded history of previous
//! types and indents. Classification is a side-effecting step: it
//! pushes the line's indent, raw text, and type into the state's
//! trackers and toggles preformatted mode on fence lines.

use forgedown_core::{LineType, ListKind, ParserState};

/// Record one line in the trackers and return its classification.
///
/// The indent is pushed before classification so the list rules can
/// compare the current line's indent against the previous one. A blank
/// line resets the indent to 0 unconditionally.
pub fn observe(state: &mut ParserState, line: &str) -> LineType {
    let indent = if line.trim().is_empty() {
        0
    } else {
        line.len() - line.trim_start_matches(' ').len()
    };
    state.indents.push(indent);
    state.lines.push(line.to_string());

    let kind = classify(state, line);
    if kind == LineType::Pre {
        state.preformatted = !state.preformatted;
    }
    state.types.push(kind);
    kind
}

/// Classify a line, leading spaces stripped, in fixed priority order.
fn classify(state: &ParserState, raw: &str) -> LineType {
    let line = raw.trim_start_matches(' ');
    if line.trim().is_empty() {
        return LineType::Blank;
    }

    let bytes = line.as_bytes();
    if line.starts_with('<') && !line.starts_with("<pre") && !line.starts_with("</pre") {
        return LineType::Raw;
    }
    if line.starts_with('#') {
        return LineType::Header;
    }
    if line.starts_with("---") || line.starts_with("* * *") {
        return LineType::Rule;
    }
    if line.starts_with("![") {
        return LineType::Image;
    }
    if line.starts_with('{') && !state.preformatted {
        return LineType::Index;
    }
    if matches!(bytes[0], b'*' | b'+' | b'-') && bytes.get(1) == Some(&b' ') {
        return list_position(state, ListKind::Unordered);
    }
    if ordered_marker(bytes) {
        return list_position(state, ListKind::Ordered);
    }
    if line.starts_with('>') {
        return match state.types.current() {
            LineType::QuoteOpen | LineType::QuoteCont => LineType::QuoteCont,
            _ => LineType::QuoteOpen,
        };
    }
    if line.starts_with("```") || line.starts_with("<pre") || line.starts_with("</pre") {
        return LineType::Pre;
    }
    if line.starts_with("[>") {
        return LineType::Footnote;
    }
    LineType::Paragraph
}

/// Sub-classify a list line as open, item, or close.
///
/// A more-indented line starts a nested list; a less-indented one
/// closes it. At equal indent, the line continues the list if the
/// previous line belonged to one of the same kind, or if any block is
/// still open; otherwise it starts a fresh list. Only one lookback
/// level is consulted, so deeper nesting is best-effort.
fn list_position(state: &ParserState, kind: ListKind) -> LineType {
    let current = *state.indents.current();
    let previous = *state.indents.previous();
    if current > previous {
        return kind.open_type();
    }
    if current < previous {
        return kind.close_type();
    }
    let prev_type = *state.types.current();
    if prev_type == kind.open_type() || prev_type == LineType::Item {
        LineType::Item
    } else if !state.close_out.is_empty() {
        LineType::Item
    } else {
        kind.open_type()
    }
}

/// One or two ASCII digits followed by a period.
fn ordered_marker(bytes: &[u8]) -> bool {
    match bytes {
        [d, b'.', ..] if d.is_ascii_digit() => true,
        [d1, d2, b'.', ..] if d1.is_ascii_digit() && d2.is_ascii_digit() => true,
        _ => false,
    }
}
