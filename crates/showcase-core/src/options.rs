//! Configuration options for markup rendering

use serde::{Deserialize, Serialize};

/// What to do with a code fence still open at end of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FencePolicy {
    /// Emit the closing tags so the output stays well-formed
    #[default]
    Close,
    /// Leave the code container unterminated
    LeaveOpen,
}

/// Class names applied to each emitted construct.
///
/// An empty string omits the `class` attribute entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub h4: String,

    /// Outer `<pre>` of a fenced block
    pub code_block: String,

    pub paragraph: String,

    pub task_list: String,
    pub task_item: String,
    pub checkbox: String,

    /// Text span of a checked task item
    pub checked_text: String,

    pub unordered_list: String,
    pub ordered_list: String,

    pub inline_code: String,
    pub link: String,
}

impl Theme {
    /// Class for a heading level; levels outside 1-4 get the h4 class
    pub fn heading(&self, level: u8) -> &str {
        match level {
            1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            _ => &self.h4,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            h1: "text-3xl font-bold mt-8 mb-4".to_string(),
            h2: "text-2xl font-semibold mt-6 mb-3".to_string(),
            h3: "text-xl font-medium mt-4 mb-2".to_string(),
            h4: "text-lg font-medium mt-3 mb-2".to_string(),
            code_block: "bg-gray-900 text-gray-100 rounded-lg p-4 my-4 overflow-x-auto"
                .to_string(),
            paragraph: "my-2 leading-relaxed".to_string(),
            task_list: "task-list my-3".to_string(),
            task_item: "flex items-start".to_string(),
            checkbox: "mt-1 mr-2 h-4 w-4 text-blue-600 bg-gray-100 border-gray-300 rounded focus:ring-blue-500"
                .to_string(),
            checked_text: "line-through text-gray-500".to_string(),
            unordered_list: "list-disc ml-6 my-3".to_string(),
            ordered_list: "list-decimal ml-6 my-3".to_string(),
            inline_code: "bg-gray-100 text-gray-800 px-1.5 py-0.5 rounded text-sm font-mono"
                .to_string(),
            link: "text-blue-600 hover:text-blue-800 underline".to_string(),
        }
    }
}

/// Options for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Class names per construct
    pub theme: Theme,

    /// Left offset in pixels per indent level of a list item
    pub indent_step_px: u32,

    /// Handling of a fence left open at end of input
    pub unterminated_fence: FencePolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            indent_step_px: 20,
            unterminated_fence: FencePolicy::Close,
        }
    }
}
