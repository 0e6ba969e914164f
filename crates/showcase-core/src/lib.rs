//! showcase-core - block/inline model and HTML writer
//!
//! This crate provides the data structures and markup emission shared by the
//! `showcase` rendering engine and the `showcase-catalog` helpers. It does not
//! parse markdown; it only knows how to write each construct once a line has
//! been classified and its inline text formatted.
//!
//! # Architecture
//!
//! ```text
//! Markdown text ──lines──▶ ┌──────────┐      ┌────────────┐
//!                          │  Block   │ ───▶ │   markup   │ ──▶ HTML String
//! inline text ────────────▶│InlineSpan│      │  (Theme)   │
//!                          └──────────┘      └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use showcase_core::{markup, InlineSpan, RenderOptions};
//!
//! let options = RenderOptions::default();
//! let mut out = String::new();
//! markup::write_span(
//!     &InlineSpan::CodeSpan { literal: "a < b".to_string() },
//!     &options,
//!     &mut out,
//! );
//! assert!(out.contains("a &lt; b"));
//! ```

mod ast;
mod escape;
pub mod markup;
mod options;

pub use ast::{Block, InlineSpan, ListKind};
pub use escape::escape_html;
pub use options::{FencePolicy, RenderOptions, Theme};
