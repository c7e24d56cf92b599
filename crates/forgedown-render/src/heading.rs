//! Heading rendering.
//!
//! Emits `<h1>`..`<hN>` fragments with a derived anchor id and a
//! trailing self-link. Heading text is emitted as-is: inline markup
//! typed into a heading is intentionally not expanded.

/// Render a heading line (leading `#`s included, already escaped).
///
/// The level is the count of leading `#` characters. The anchor id is
/// built from the alphanumeric characters of the text preceding the
/// first colon, so "## Setup: part one" gets the id "Setup".
pub fn render_heading(text: &str) -> String {
    let level = text.len() - text.trim_start_matches('#').len();
    let anchor: String = text
        .split(':')
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    let body = text.trim_matches('#').trim();
    format!(
        "<h{level} class=\"headers\" id=\"{anchor}\">{body}\
         <span>&nbsp;<a href=\"#{anchor}\">#</a></span></h{level}>"
    )
}
