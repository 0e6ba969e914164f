//! Inline formatting of a single line.
//!
//! Passes run in a fixed order over the whole fragment:
//!
//! 1. code spans are parked behind placeholders
//! 2. links are parked behind placeholders
//! 3. bold (`**x**`, `__x__`)
//! 4. italic (`*x*`, `_x_`) with word-boundary checks
//! 5. links restored, then code spans restored
//!
//! Parked spans are invisible to the emphasis passes, so their content is never
//! re-scanned. Unbalanced delimiters are left as literal text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use showcase_core::{markup, InlineSpan, RenderOptions};

/// Opens a placeholder token. Input containing it is rejected before parsing.
pub(crate) const TOKEN_OPEN: char = '\u{E000}';
/// Closes a placeholder token.
pub(crate) const TOKEN_CLOSE: char = '\u{E001}';

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern"));

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern"));

static BOLD_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+?)\*\*").expect("bold pattern"));

static BOLD_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__([^_]+?)__").expect("bold pattern"));

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{TOKEN_OPEN}([CL])([0-9]+){TOKEN_CLOSE}")).expect("token pattern")
});

/// Whether a character belongs to the placeholder alphabet
pub(crate) fn is_reserved(c: char) -> bool {
    c == TOKEN_OPEN || c == TOKEN_CLOSE
}

/// Which vault slot a placeholder refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Code,
    Link,
}

impl Slot {
    fn marker(self) -> &'static str {
        match self {
            Slot::Code => "C",
            Slot::Link => "L",
        }
    }
}

/// Spans pulled out of a line while destructive passes run over the rest
#[derive(Debug, Default)]
struct Placeholders {
    code: Vec<InlineSpan>,
    links: Vec<InlineSpan>,
}

impl Placeholders {
    /// Store a span and return the token standing in for it
    fn park(&mut self, slot: Slot, span: InlineSpan) -> String {
        let spans = self.slot_mut(slot);
        spans.push(span);
        format!(
            "{TOKEN_OPEN}{}{}{TOKEN_CLOSE}",
            slot.marker(),
            spans.len() - 1
        )
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Vec<InlineSpan> {
        match slot {
            Slot::Code => &mut self.code,
            Slot::Link => &mut self.links,
        }
    }

    fn slot(&self, slot: Slot) -> &[InlineSpan] {
        match slot {
            Slot::Code => &self.code,
            Slot::Link => &self.links,
        }
    }

    /// Replace every token of one slot with the markup of its span
    fn restore(&self, text: &str, slot: Slot, options: &RenderOptions) -> String {
        let spans = self.slot(slot);
        if spans.is_empty() {
            return text.to_string();
        }

        TOKEN
            .replace_all(text, |caps: &Captures| {
                let parked = caps[2]
                    .parse::<usize>()
                    .ok()
                    .filter(|_| &caps[1] == slot.marker())
                    .and_then(|index| spans.get(index));

                match parked {
                    Some(span) => {
                        let mut out = String::new();
                        markup::write_span(span, options, &mut out);
                        out
                    }
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Format one line of text into an inline markup fragment
pub fn format_inline(text: &str, options: &RenderOptions) -> String {
    let mut vault = Placeholders::default();

    let result = CODE_SPAN.replace_all(text, |caps: &Captures| {
        vault.park(
            Slot::Code,
            InlineSpan::CodeSpan {
                literal: caps[1].to_string(),
            },
        )
    });

    let result = LINK.replace_all(&result, |caps: &Captures| {
        vault.park(
            Slot::Link,
            InlineSpan::Link {
                label: caps[1].to_string(),
                url: caps[2].to_string(),
            },
        )
    });

    let result = replace_bold(&BOLD_STAR, &result, options);
    let result = replace_bold(&BOLD_UNDERSCORE, &result, options);

    let result = replace_italic(&result, b'*', options);
    let result = replace_italic(&result, b'_', options);

    let result = vault.restore(&result, Slot::Link, options);
    vault.restore(&result, Slot::Code, options)
}

fn replace_bold(pattern: &Regex, text: &str, options: &RenderOptions) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            let mut out = String::new();
            markup::write_span(
                &InlineSpan::Bold {
                    inner: caps[1].to_string(),
                },
                options,
                &mut out,
            );
            out
        })
        .into_owned()
}

/// ASCII word character (`[A-Za-z0-9_]`)
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// A delimiter can open emphasis unless it follows another delimiter or a
/// word character.
fn can_open(bytes: &[u8], at: usize, delim: u8) -> bool {
    match at.checked_sub(1).map(|prev| bytes[prev]) {
        None => true,
        Some(prev) => prev != delim && !is_word_byte(prev),
    }
}

/// Position of the delimiter closing the run opened at `open`.
///
/// The content runs up to the next delimiter and must be non-empty; the
/// closing delimiter must not be followed by another one.
fn find_close(bytes: &[u8], open: usize, delim: u8) -> Option<usize> {
    let start = open + 1;
    let offset = bytes[start..].iter().position(|&b| b == delim)?;
    let close = start + offset;

    if offset == 0 || bytes.get(close + 1) == Some(&delim) {
        return None;
    }
    Some(close)
}

/// Replace single-delimiter emphasis runs with italic markup.
///
/// Delimiters are ASCII, so byte positions always fall on char boundaries.
fn replace_italic(text: &str, delim: u8, options: &RenderOptions) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == delim && can_open(bytes, i, delim) {
            if let Some(close) = find_close(bytes, i, delim) {
                write_plain(&text[copied..i], options, &mut out);
                markup::write_span(
                    &InlineSpan::Italic {
                        inner: text[i + 1..close].to_string(),
                    },
                    options,
                    &mut out,
                );
                copied = close + 1;
                i = close + 1;
                continue;
            }
        }
        i += 1;
    }

    write_plain(&text[copied..], options, &mut out);
    out
}

/// Text between emphasis runs, passed through unchanged
fn write_plain(text: &str, options: &RenderOptions, out: &mut String) {
    if !text.is_empty() {
        markup::write_span(&InlineSpan::PlainText(text.to_string()), options, out);
    }
}
