//! Core enums for the line-classification state machine.
//!
//! Every input line is assigned a [`LineType`] before rendering; the
//! block renderer dispatches on it. [`CloseTag`] entries record the
//! closing HTML owed for block elements that span multiple lines.

use serde::{Deserialize, Serialize};

/// Classification assigned to a single input line.
///
/// List lines carry their position inside the surrounding list
/// structure: an opening line starts a new wrapper, an item continues
/// the current one, and a closing line folds a nested wrapper shut.
/// Items are shared between ordered and unordered lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineType {
    /// Empty (after trimming) line
    #[default]
    Blank,
    /// Raw HTML, passed through untouched
    Raw,
    /// Heading (leading #)
    Header,
    /// Horizontal rule
    Rule,
    /// Image directive
    Image,
    /// Series index directive (external link list)
    Index,
    /// First line of an unordered list
    UlOpen,
    /// Un-indented line closing a nested unordered list
    UlClose,
    /// First line of an ordered list
    OlOpen,
    /// Un-indented line closing a nested ordered list
    OlClose,
    /// Continuation item of either list kind
    Item,
    /// First line of a blockquote
    QuoteOpen,
    /// Continuation line of a blockquote
    QuoteCont,
    /// Preformatted-mode toggle (fence or pre tag)
    Pre,
    /// Footnote body
    Footnote,
    /// Default: plain paragraph
    Paragraph,
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            LineType::Blank => "blank",
            LineType::Raw => "raw",
            LineType::Header => "header",
            LineType::Rule => "hr",
            LineType::Image => "img",
            LineType::Index => "idx",
            LineType::UlOpen => "ul",
            LineType::UlClose => "/ul",
            LineType::OlOpen => "ol",
            LineType::OlClose => "/ol",
            LineType::Item => "li",
            LineType::QuoteOpen => "blockquote",
            LineType::QuoteCont => "bqt",
            LineType::Pre => "pre",
            LineType::Footnote => "fn",
            LineType::Paragraph => "p",
        };
        write!(f, "{}", tag)
    }
}

/// The two list flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Bulleted list (*, +, -)
    Unordered,
    /// Numbered list (1., 2., ...)
    Ordered,
}

impl ListKind {
    /// Line type opening a list of this kind.
    pub fn open_type(self) -> LineType {
        match self {
            ListKind::Unordered => LineType::UlOpen,
            ListKind::Ordered => LineType::OlOpen,
        }
    }

    /// Line type closing a nested list of this kind.
    pub fn close_type(self) -> LineType {
        match self {
            ListKind::Unordered => LineType::UlClose,
            ListKind::Ordered => LineType::OlClose,
        }
    }

    /// Close-out entry owed once a list of this kind is open.
    pub fn close_tag(self) -> CloseTag {
        match self {
            ListKind::Unordered => CloseTag::UnorderedList,
            ListKind::Ordered => CloseTag::OrderedList,
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Unordered => write!(f, "unordered"),
            ListKind::Ordered => write!(f, "ordered"),
        }
    }
}

/// Closing tag owed for an open block-level element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloseTag {
    /// Pending `</ul>`
    UnorderedList,
    /// Pending `</ol>`
    OrderedList,
    /// Pending `</blockquote>`
    Blockquote,
}

impl CloseTag {
    /// The HTML emitted when this entry is flushed.
    pub fn as_str(self) -> &'static str {
        match self {
            CloseTag::UnorderedList => "</ul>\n",
            CloseTag::OrderedList => "</ol>\n",
            CloseTag::Blockquote => "</blockquote>\n",
        }
    }
}

impl std::fmt::Display for CloseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
