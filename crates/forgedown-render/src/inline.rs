//! Inline markup expansion.
//!
//! A pure, stateless pass over one escaped text span. Emphasis, code
//! spans, smart quotes, links, and footnote references become HTML in a
//! fixed pass order. Delimiters are paired strictly left to right;
//! anything left unpaired stays literal rather than raising an error.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for an apostrophe between word characters (a contraction).
static CONTRACTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w'\w").unwrap());

/// Regex for a single-quoted span.
static SINGLE_QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'[^']+'").unwrap());

/// Regex for a double-quoted span.
static DOUBLE_QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]+""#).unwrap());

/// Regex for a link: [title](url), url possibly empty.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^\)]*)\)").unwrap());

/// Regex for a footnote reference: [^N]
static FOOTNOTE_REF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\^([0-9]+)\]").unwrap());

/// Expand inline markup in one escaped span.
///
/// Identical input and base URL always produce byte-identical output;
/// there is no hidden state.
pub fn expand(text: &str, base_url: &str) -> String {
    // Three or more trailing spaces become an explicit break, checked
    // before the span is trimmed.
    let trailing = text.len() - text.trim_end_matches(' ').len();
    let mut line = text.trim().to_string();
    if trailing > 2 {
        line.push_str("<br />");
    }
    if line.is_empty() {
        return line;
    }

    line = line.replace("--", "&#160;&#8212;&#160;");

    // Strong before emphasis, so ** cannot be misread as nested <em>.
    // A leftover unpaired ** is neutralized to entities for the same
    // reason.
    line = pair_replace(&line, "**", "<strong>", "</strong>");
    line = line.replace("**", "&#42;&#42;");
    line = pair_replace(&line, "*", "<em>", "</em>");
    line = pair_replace(&line, "`", "<code>", "</code>");

    line = smart_apostrophes(&line);
    line = smart_double_quotes(&line);
    line = expand_links(&line, base_url);
    expand_footnote_refs(&line)
}

/// Replace delimiter pairs left to right with open/close tags.
///
/// A final unpaired delimiter is left in place.
fn pair_replace(line: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        let Some(first) = rest.find(delim) else { break };
        let after_first = &rest[first + delim.len()..];
        let Some(second) = after_first.find(delim) else { break };
        out.push_str(&rest[..first]);
        out.push_str(open);
        out.push_str(&after_first[..second]);
        out.push_str(close);
        rest = &after_first[second + delim.len()..];
    }
    out.push_str(rest);
    out
}

/// Rebuild a line, mapping every regex match through `f`.
fn replace_matches(line: &str, re: &Regex, mut f: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for m in re.find_iter(line) {
        out.push_str(&line[last..m.start()]);
        out.push_str(&f(m.as_str()));
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

/// Convert apostrophes and single-quote pairs to typographic entities.
///
/// Contractions go first so their apostrophes cannot be mistaken for
/// span delimiters; whatever remains unpaired defaults to a right
/// single quote.
fn smart_apostrophes(line: &str) -> String {
    let line = replace_matches(line, &CONTRACTION_RE, |m| m.replace('\'', "&#8217;"));
    let line = replace_matches(&line, &SINGLE_QUOTED_RE, |m| {
        let inner = &m[1..m.len() - 1];
        format!("&#8216;{}&#8217;", inner)
    });
    line.replace('\'', "&#8217;")
}

/// Convert double-quote pairs to typographic entities; an unpaired
/// leading or trailing quote is converted individually.
fn smart_double_quotes(line: &str) -> String {
    let mut out = replace_matches(line, &DOUBLE_QUOTED_RE, |m| {
        let inner = &m[1..m.len() - 1];
        format!("&#8220;{}&#8221;", inner)
    });
    if out.starts_with('"') {
        out.replace_range(0..1, "&#8220;");
    }
    if out.ends_with('"') {
        let start = out.len() - 1;
        out.replace_range(start.., "&#8221;");
    }
    out
}

/// Expand [title](url) links, deriving and rewriting destinations.
fn expand_links(line: &str, base_url: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for caps in LINK_RE.captures_iter(line) {
        let m = caps.get(0).expect("match always has a full group");
        let title = &caps[1];
        let href = resolve_link(title, &caps[2], base_url);
        out.push_str(&line[last..m.start()]);
        out.push_str("<a href=\"");
        out.push_str(&href);
        out.push_str("\">");
        out.push_str(title);
        out.push_str("</a>");
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

/// Resolve a link destination.
///
/// An empty destination is derived from the title (emphasis tags
/// stripped, `.txt` appended). A `.txt` destination becomes a
/// site-relative permalink under `blog/`: lower-cased, right-quote
/// entities dropped, spaces hyphenated, extension swapped to `.html`.
fn resolve_link(title: &str, url: &str, base_url: &str) -> String {
    let url = if url.is_empty() {
        format!("{}.txt", title.replace("<em>", "").replace("</em>", ""))
    } else {
        url.to_string()
    };
    match url.strip_suffix(".txt") {
        Some(stem) => {
            let slug = stem
                .to_lowercase()
                .replace("&#8217;", "")
                .replace(' ', "-");
            let base = base_url.trim_end_matches('/');
            if base.is_empty() {
                format!("blog/{}.html", slug)
            } else {
                format!("{}/blog/{}.html", base, slug)
            }
        }
        None => url,
    }
}

/// Expand [^N] references into superscript anchors.
fn expand_footnote_refs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for caps in FOOTNOTE_REF_RE.captures_iter(line) {
        let m = caps.get(0).expect("match always has a full group");
        let mark = &caps[1];
        out.push_str(&line[last..m.start()]);
        out.push_str(&format!(
            "<sup id=\"fnref{mark}\"><a href=\"#fn{mark}\" rel=\"footnote\">{mark}</a></sup>"
        ));
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}
