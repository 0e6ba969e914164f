//! Ordered line rules for block classification.

mod markdown;
mod rule;

pub use markdown::block_rules;
pub use rule::LineRule;

use showcase_core::Block;

/// Ordered collection of line rules; the first match wins
#[derive(Debug, Clone)]
pub struct Rules {
    rules: Vec<LineRule>,
}

impl Rules {
    /// Create the built-in rule set
    pub fn new() -> Self {
        Self {
            rules: block_rules(),
        }
    }

    /// Rule names in priority order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    /// Classify a line that is outside any code fence and not blank.
    ///
    /// Lines no rule recognises are paragraphs.
    pub fn classify<'a>(&self, line: &'a str) -> Block<'a> {
        for rule in &self.rules {
            if let Some(block) = rule.apply(line) {
                return block;
            }
        }

        Block::Paragraph { text: line }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
