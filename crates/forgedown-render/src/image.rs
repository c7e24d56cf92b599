//! Image fragment rendering.
//!
//! Handles `![description](url)` and `![description](url "alt words")`
//! lines. Destinations pointing at the site's own host are rewritten to
//! a relative asset path so content files survive a domain move.

/// Render an image line (already escaped) into a wrapper fragment.
pub fn render_image(text: &str, base_url: &str) -> String {
    let mut parts = text.split(']');
    let desc = parts.next().unwrap_or("").get(2..).unwrap_or("");
    let tail = parts.next().unwrap_or("");

    let (url, alt) = match tail.split_once(' ') {
        Some((first, quoted)) => {
            let url = first.get(1..).unwrap_or("");
            // Alt text arrives as `"words")`; drop the quote and the
            // closing `")`.
            let alt = quoted
                .get(1..quoted.len().saturating_sub(2))
                .unwrap_or("");
            (url, alt)
        }
        None => {
            let url = tail.get(1..tail.len().saturating_sub(1)).unwrap_or("");
            (url, "")
        }
    };

    let url = localize(url, base_url);
    format!("<div class='image'><img src='{url}' alt='{alt}' title='{desc}' /></div>")
}

/// Rewrite a destination on the site's own host to `/assets/...`.
fn localize(url: &str, base_url: &str) -> String {
    let host = host_of(base_url);
    if !host.is_empty() {
        if let Some((_, path)) = url.split_once(&format!("{host}/")) {
            return format!("/assets/{path}");
        }
    }
    url.to_string()
}

/// The host portion of a base URL, scheme and path stripped.
fn host_of(base_url: &str) -> &str {
    let no_scheme = match base_url.split_once("://") {
        Some((_, rest)) => rest,
        None => base_url,
    };
    no_scheme.split('/').next().unwrap_or("")
}
