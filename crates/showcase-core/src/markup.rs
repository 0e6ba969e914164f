//! HTML emission
//!
//! Each function appends one construct to `out`. Inline content handed to the
//! block writers is already-formatted markup and is inserted verbatim; only
//! code lines and code spans pass through [`escape_html`].

use crate::ast::{InlineSpan, ListKind};
use crate::escape::escape_html;
use crate::options::RenderOptions;

fn open_tag(tag: &str, class: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_class(class, out);
    out.push('>');
}

fn push_class(class: &str, out: &mut String) {
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(class);
        out.push('"');
    }
}

/// Two columns of leading whitespace make one indent step; an odd column
/// count gives a half step.
fn push_offset(indent_columns: usize, options: &RenderOptions, out: &mut String) {
    let px = indent_columns as f64 * f64::from(options.indent_step_px) / 2.0;
    out.push_str(" style=\"margin-left: ");
    out.push_str(&px.to_string());
    out.push_str("px;\"");
}

/// Open the container for a list kind
pub fn open_list(kind: ListKind, options: &RenderOptions, out: &mut String) {
    let theme = &options.theme;
    let class = match kind {
        ListKind::Task => &theme.task_list,
        ListKind::Unordered => &theme.unordered_list,
        ListKind::Ordered => &theme.ordered_list,
    };
    open_tag(kind.tag(), class, out);
}

/// Close the container for a list kind
pub fn close_list(kind: ListKind, out: &mut String) {
    out.push_str("</");
    out.push_str(kind.tag());
    out.push('>');
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        0 | 1 => "h1",
        2 => "h2",
        3 => "h3",
        _ => "h4",
    }
}

/// Heading element; levels outside 1-4 are clamped
pub fn write_heading(level: u8, content: &str, options: &RenderOptions, out: &mut String) {
    let level = level.clamp(1, 4);
    let tag = heading_tag(level);
    open_tag(tag, options.theme.heading(level), out);
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Open a fenced block. An empty language emits a bare `<code>`.
pub fn open_code_block(language: &str, options: &RenderOptions, out: &mut String) {
    open_tag("pre", &options.theme.code_block, out);
    if language.is_empty() {
        out.push_str("<code>");
    } else {
        out.push_str("<code class=\"language-");
        out.push_str(&escape_html(language));
        out.push_str("\">");
    }
}

/// One literal line of a fenced block, newline-terminated
pub fn write_code_line(text: &str, out: &mut String) {
    out.push_str(&escape_html(text));
    out.push('\n');
}

pub fn close_code_block(out: &mut String) {
    out.push_str("</code></pre>");
}

/// Checkbox item; checked items get the struck-through text class
pub fn write_task_item(
    indent_columns: usize,
    checked: bool,
    content: &str,
    options: &RenderOptions,
    out: &mut String,
) {
    let theme = &options.theme;

    out.push_str("<li");
    push_class(&theme.task_item, out);
    push_offset(indent_columns, options, out);
    out.push('>');

    out.push_str("<input type=\"checkbox\"");
    if checked {
        out.push_str(" checked");
    }
    out.push_str(" disabled");
    push_class(&theme.checkbox, out);
    out.push('>');

    let text_class = if checked { theme.checked_text.as_str() } else { "" };
    open_tag("span", text_class, out);
    out.push_str(content);
    out.push_str("</span></li>");
}

/// Bulleted or numbered item
pub fn write_list_item(
    indent_columns: usize,
    content: &str,
    options: &RenderOptions,
    out: &mut String,
) {
    out.push_str("<li");
    push_offset(indent_columns, options, out);
    out.push('>');
    out.push_str(content);
    out.push_str("</li>");
}

pub fn write_line_break(out: &mut String) {
    out.push_str("<br>");
}

/// Paragraph wrapper; nothing is written when `content` is blank
pub fn write_paragraph(content: &str, options: &RenderOptions, out: &mut String) {
    if content.trim().is_empty() {
        return;
    }
    open_tag("p", &options.theme.paragraph, out);
    out.push_str(content);
    out.push_str("</p>");
}

pub fn write_span(span: &InlineSpan, options: &RenderOptions, out: &mut String) {
    match span {
        InlineSpan::PlainText(text) => out.push_str(text),

        InlineSpan::CodeSpan { literal } => {
            open_tag("code", &options.theme.inline_code, out);
            out.push_str(&escape_html(literal));
            out.push_str("</code>");
        }

        InlineSpan::Link { label, url } => {
            out.push_str("<a href=\"");
            out.push_str(url);
            out.push('"');
            push_class(&options.theme.link, out);
            out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\">");
            out.push_str(label);
            out.push_str("</a>");
        }

        InlineSpan::Bold { inner } => {
            out.push_str("<strong>");
            out.push_str(inner);
            out.push_str("</strong>");
        }

        InlineSpan::Italic { inner } => {
            out.push_str("<em>");
            out.push_str(inner);
            out.push_str("</em>");
        }
    }
}
