//! Line and inline classification results
//!
//! A `Block` is produced for every source line and consumed immediately by the
//! parser; nothing here is retained across lines.

/// The kind of list container currently accumulating items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bulleted list (`-`, `*`, `+`)
    Unordered,
    /// Numbered list, numbering assigned by the host
    Ordered,
    /// Checkbox list (`- [ ]`, `- [x]`)
    Task,
}

impl ListKind {
    /// Closing tag name of the container for this kind
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered | ListKind::Task => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Classification of one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// ATX heading, level 1-4
    Heading { level: u8, text: &'a str },

    /// Opening fence with its (trimmed) info string
    CodeFenceOpen { language: &'a str },

    /// Closing fence
    CodeFenceClose,

    /// Raw line inside a fenced block
    CodeLine { text: &'a str },

    /// `- [ ]` / `- [x]` item. `indent_columns` counts the leading spaces and
    /// tabs; half of it is the indent level.
    TaskListItem {
        indent_columns: usize,
        checked: bool,
        text: &'a str,
    },

    /// `-`, `*` or `+` item
    UnorderedListItem { indent_columns: usize, text: &'a str },

    /// `1.` style item; the source number is discarded
    OrderedListItem { indent_columns: usize, text: &'a str },

    /// Empty or whitespace-only line
    BlankLine,

    /// Anything else
    Paragraph { text: &'a str },
}

impl Block<'_> {
    /// The list container this block belongs in, if it is a list item
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::TaskListItem { .. } => Some(ListKind::Task),
            Block::UnorderedListItem { .. } => Some(ListKind::Unordered),
            Block::OrderedListItem { .. } => Some(ListKind::Ordered),
            _ => None,
        }
    }

    /// Short label used in log output
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::CodeFenceOpen { .. } => "fence-open",
            Block::CodeFenceClose => "fence-close",
            Block::CodeLine { .. } => "code-line",
            Block::TaskListItem { .. } => "task-item",
            Block::UnorderedListItem { .. } => "unordered-item",
            Block::OrderedListItem { .. } => "ordered-item",
            Block::BlankLine => "blank",
            Block::Paragraph { .. } => "paragraph",
        }
    }
}

/// An inline fragment of a single line
///
/// Code spans and links are atomic: their interior is never scanned for
/// emphasis. Bold and italic wrap text that has already been formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Text inserted as-is
    PlainText(String),

    /// Backtick code span; content is escaped on output
    CodeSpan { literal: String },

    /// `[label](url)`; both parts are inserted literally
    Link { label: String, url: String },

    /// `**inner**` or `__inner__`
    Bold { inner: String },

    /// `*inner*` or `_inner_`
    Italic { inner: String },
}
