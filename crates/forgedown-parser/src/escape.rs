//! Entity escaping for reserved characters.
//!
//! Runs before block classification and inline expansion. Besides the
//! usual `&`/`<`/`>` entities, asterisks inside backtick code spans are
//! converted to their entity up front so the emphasis passes cannot
//! pair against them later.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a single-backtick inline code span.
static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`\n]+`").unwrap());

/// Escape reserved characters in one line of text.
///
/// Pass order matters: ampersands first (the replacement entities
/// themselves contain none), then code-span protection, then escaped
/// punctuation, then angle brackets.
pub fn escape(line: &str) -> String {
    let mut line = line.replace('&', "&#38;");
    line = protect_code_spans(&line);
    line = line.replace("\\`", "&#8245;");
    line = line.replace("\\*", "&#42;");
    line.replace('<', "&lt;").replace('>', "&gt;")
}

/// Convert asterisks inside backtick-delimited spans to `&#42;`.
fn protect_code_spans(line: &str) -> String {
    if !line.contains('`') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for m in CODE_SPAN_RE.find_iter(line) {
        out.push_str(&line[last..m.start()]);
        out.push_str(&m.as_str().replace('*', "&#42;"));
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}
