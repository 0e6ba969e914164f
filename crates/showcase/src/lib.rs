//! # showcase
//!
//! Render short markdown documents (READMEs, daily notes) into a restricted
//! HTML subset meant for embedding inside a pre-styled container.
//!
//! ## Design
//!
//! Rendering is a two-pass, line-oriented transform rather than a full
//! markdown grammar:
//!
//! - **Block pass**: every line is classified on its own against an ordered
//!   list of line rules, with a small state machine tracking the open code
//!   fence and the open list container.
//! - **Inline pass**: the text of each classified line gets code spans,
//!   links, bold and italic. Code spans and links are parked behind
//!   placeholders so the emphasis passes cannot reach into them.
//!
//! Each call owns its parser state, so independent documents can be rendered
//! from as many threads as needed.
//!
//! ## Example
//!
//! ```rust
//! use showcase::Renderer;
//!
//! let renderer = Renderer::new();
//! let html = renderer.render("# Hello\n\nSome **bold** text").unwrap();
//! assert!(html.contains("Hello</h1>"));
//! assert!(html.contains("<strong>bold</strong>"));
//! ```

mod inline;
pub mod parser;
mod rules;
mod service;

pub use inline::format_inline;
pub use parser::{classify, BlockParser, ParserState};
pub use rules::{block_rules, LineRule, Rules};
pub use service::{render, Renderer};
pub use showcase_core::{
    escape_html, Block, FencePolicy, InlineSpan, ListKind, RenderOptions, Theme,
};

/// Error type for rendering operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Reserved character U+{codepoint:04X} at line {line}, column {column}")]
    ReservedCharacter {
        codepoint: u32,
        line: usize,
        column: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
