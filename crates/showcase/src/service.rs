//! Renderer - the main entry point for markdown to markup conversion.

use showcase_core::RenderOptions;

use crate::inline::is_reserved;
use crate::parser::BlockParser;
use crate::rules::Rules;
use crate::{RenderError, Result};

/// Renders markdown documents with a fixed set of options
#[derive(Debug, Clone)]
pub struct Renderer {
    options: RenderOptions,
    rules: Rules,
}

impl Renderer {
    /// Create a new Renderer with default options
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a Renderer with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Convert a markdown document to markup.
    ///
    /// Input containing the private-use code points used for placeholders is
    /// rejected rather than rendered incorrectly.
    pub fn render(&self, text: &str) -> Result<String> {
        check_reserved(text)?;

        let parser = BlockParser::new(&self.options, &self.rules);
        Ok(parser.parse(text))
    }

    /// Decode UTF-8 bytes, then render them
    pub fn render_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes)?;
        self.render(text)
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a document with default options
pub fn render(text: &str) -> Result<String> {
    Renderer::new().render(text)
}

fn check_reserved(text: &str) -> Result<()> {
    for (line_index, line) in text.split('\n').enumerate() {
        if let Some((column, c)) = line.chars().enumerate().find(|(_, c)| is_reserved(*c)) {
            log::warn!(
                "rejecting input: reserved character at line {}, column {}",
                line_index + 1,
                column + 1
            );
            return Err(RenderError::ReservedCharacter {
                codepoint: u32::from(c),
                line: line_index + 1,
                column: column + 1,
            });
        }
    }
    Ok(())
}
