//! Series index expansion.
//!
//! A `{name}` line embeds a list of links read from an external file,
//! one link per line. The read is synchronous and local; a missing or
//! unreadable file degrades to a visible inline error marker so the
//! surrounding conversion never aborts.

use log::warn;
use std::fs;
use std::path::Path;

/// Marker emitted when the named index file cannot be read.
pub const MISSING_INDEX: &str = "<blink>ERROR: Index file does not exist.</blink>";

/// Expand a series-index line (already escaped) into a link list.
pub fn render_index(text: &str, dir: &Path) -> String {
    let inner = text.strip_prefix('{').unwrap_or(text);
    let name = inner.strip_suffix('}').unwrap_or(inner);
    let path = dir.join(name);

    let body = match fs::read_to_string(&path) {
        Ok(body) => body,
        Err(err) => {
            warn!("series index {} unreadable: {}", path.display(), err);
            return MISSING_INDEX.to_string();
        }
    };

    let mut out = String::from("<ul style=\"border:1px dashed gray\" id=\"series_index\">\n");
    for entry in body.lines() {
        out.push_str("    <li>");
        out.push_str(entry.trim());
        out.push_str("</li>\n");
    }
    out.push_str("</ul>");
    out
}
