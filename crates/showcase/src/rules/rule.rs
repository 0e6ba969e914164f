//! LineRule type for block classification.

use showcase_core::Block;

/// Signature of a line matcher
pub type MatchFn = for<'a> fn(&'a str) -> Option<Block<'a>>;

/// A named matcher that recognises one block construct on a single line
#[derive(Clone, Copy)]
pub struct LineRule {
    /// Name used in log output
    pub name: &'static str,
    matcher: MatchFn,
}

impl LineRule {
    pub fn new(name: &'static str, matcher: MatchFn) -> Self {
        Self { name, matcher }
    }

    /// Apply this rule to a line
    pub fn apply<'a>(&self, line: &'a str) -> Option<Block<'a>> {
        (self.matcher)(line)
    }
}

impl std::fmt::Debug for LineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineRule").field("name", &self.name).finish()
    }
}
