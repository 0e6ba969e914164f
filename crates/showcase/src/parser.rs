//! Line-by-line block parsing.
//!
//! [`classify`] turns one line into a [`Block`] from the line itself and the
//! current [`ParserState`]; [`BlockParser`] threads that state through the
//! document and writes markup as it goes.

use showcase_core::{markup, Block, FencePolicy, ListKind, RenderOptions};

use crate::inline::format_inline;
use crate::rules::Rules;

const FENCE: &str = "```";

/// Mutable state for one parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    pub in_code_block: bool,

    /// Info string of the open fence; empty outside a code block
    pub code_block_language: String,

    /// `None` whenever `in_code_block` is true
    pub open_list: Option<ListKind>,
}

/// Classify a line given the current state.
///
/// Precedence: fence, code line, blank, then the ordered line rules, then
/// paragraph.
pub fn classify<'a>(line: &'a str, state: &ParserState, rules: &Rules) -> Block<'a> {
    if let Some(rest) = line.strip_prefix(FENCE) {
        return if state.in_code_block {
            Block::CodeFenceClose
        } else {
            Block::CodeFenceOpen {
                language: rest.trim(),
            }
        };
    }

    if state.in_code_block {
        return Block::CodeLine { text: line };
    }

    if line.trim().is_empty() {
        return Block::BlankLine;
    }

    rules.classify(line)
}

/// Converts a document into markup
pub struct BlockParser<'r> {
    options: &'r RenderOptions,
    rules: &'r Rules,
    state: ParserState,
    out: String,
}

impl<'r> BlockParser<'r> {
    pub fn new(options: &'r RenderOptions, rules: &'r Rules) -> Self {
        Self {
            options,
            rules,
            state: ParserState::default(),
            out: String::new(),
        }
    }

    /// Current state, mainly for inspection between [`BlockParser::feed`] calls
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Parse a whole document and return its markup
    pub fn parse(mut self, document: &str) -> String {
        self.out.reserve(document.len() * 2);

        for (index, line) in document.lines().enumerate() {
            log::trace!("line {}: {:?}", index + 1, line);
            self.feed(line);
        }

        self.finish()
    }

    /// Classify one line and write its markup
    pub fn feed(&mut self, line: &str) {
        let block = classify(line, &self.state, self.rules);
        log::debug!("classified {} line", block.kind_name());

        match block {
            Block::CodeFenceOpen { language } => {
                self.close_list();
                self.state.in_code_block = true;
                self.state.code_block_language = language.to_string();
                markup::open_code_block(language, self.options, &mut self.out);
            }

            Block::CodeFenceClose => {
                self.state.in_code_block = false;
                self.state.code_block_language.clear();
                markup::close_code_block(&mut self.out);
            }

            Block::CodeLine { text } => markup::write_code_line(text, &mut self.out),

            Block::BlankLine => {
                if self.state.open_list.is_none() {
                    markup::write_line_break(&mut self.out);
                }
            }

            other => self.write_block(other),
        }
    }

    fn write_block(&mut self, block: Block<'_>) {
        let kind = block.list_kind();
        if self.state.open_list != kind {
            self.close_list();
        }

        if let Some(kind) = kind {
            self.open_list(kind);
        }

        let options = self.options;
        let out = &mut self.out;

        match block {
            Block::Heading { level, text } => {
                markup::write_heading(level, &format_inline(text, options), options, out)
            }

            Block::TaskListItem {
                indent_columns,
                checked,
                text,
            } => markup::write_task_item(
                indent_columns,
                checked,
                &format_inline(text, options),
                options,
                out,
            ),

            Block::UnorderedListItem { indent_columns, text }
            | Block::OrderedListItem { indent_columns, text } => {
                let content = format_inline(text, options);
                markup::write_list_item(indent_columns, &content, options, out)
            }

            Block::Paragraph { text } => {
                markup::write_paragraph(&format_inline(text, options), options, out)
            }

            // Fence, code and blank lines are handled in `feed`.
            Block::CodeFenceOpen { .. }
            | Block::CodeFenceClose
            | Block::CodeLine { .. }
            | Block::BlankLine => {}
        }
    }

    fn open_list(&mut self, kind: ListKind) {
        if self.state.open_list.is_none() {
            log::debug!("opening {:?} list", kind);
            markup::open_list(kind, self.options, &mut self.out);
            self.state.open_list = Some(kind);
        }
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.state.open_list.take() {
            log::debug!("closing {:?} list", kind);
            markup::close_list(kind, &mut self.out);
        }
    }

    /// Close whatever is still open and return the markup
    pub fn finish(mut self) -> String {
        if self.state.in_code_block {
            match self.options.unterminated_fence {
                FencePolicy::Close => {
                    log::warn!(
                        "closing unterminated code fence (language {:?}) at end of input",
                        self.state.code_block_language
                    );
                    markup::close_code_block(&mut self.out);
                }
                FencePolicy::LeaveOpen => {
                    log::warn!(
                        "leaving code fence (language {:?}) open at end of input",
                        self.state.code_block_language
                    );
                }
            }
            self.state.in_code_block = false;
            self.state.code_block_language.clear();
        }

        self.close_list();
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use showcase_core::Theme;

    fn bare_options() -> RenderOptions {
        let empty = String::new;
        RenderOptions {
            theme: Theme {
                h1: empty(),
                h2: empty(),
                h3: empty(),
                h4: empty(),
                code_block: empty(),
                paragraph: empty(),
                task_list: empty(),
                task_item: empty(),
                checkbox: empty(),
                checked_text: "done".to_string(),
                unordered_list: empty(),
                ordered_list: empty(),
                inline_code: empty(),
                link: empty(),
            },
            ..RenderOptions::default()
        }
    }

    fn parse_with(document: &str, options: &RenderOptions) -> String {
        let rules = Rules::new();
        BlockParser::new(options, &rules).parse(document)
    }

    fn parse(document: &str) -> String {
        parse_with(document, &bare_options())
    }

    #[rstest]
    #[case("```rust", false, Block::CodeFenceOpen { language: "rust" })]
    #[case("```  py  ", false, Block::CodeFenceOpen { language: "py" })]
    #[case("```", true, Block::CodeFenceClose)]
    #[case("```rust", true, Block::CodeFenceClose)]
    #[case("# not a heading", true, Block::CodeLine { text: "# not a heading" })]
    #[case("- [ ] not a task", true, Block::CodeLine { text: "- [ ] not a task" })]
    #[case("", true, Block::CodeLine { text: "" })]
    #[case("   ", false, Block::BlankLine)]
    #[case("# Title", false, Block::Heading { level: 1, text: "Title" })]
    #[case(" ```", false, Block::Paragraph { text: " ```" })]
    fn test_classify(#[case] line: &str, #[case] in_code_block: bool, #[case] expected: Block) {
        let state = ParserState {
            in_code_block,
            ..ParserState::default()
        };
        assert_eq!(classify(line, &state, &Rules::new()), expected);
    }

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(parse("# Title\nbody"), "<h1>Title</h1><p>body</p>");
    }

    #[test]
    fn test_five_hashes_is_paragraph() {
        assert_eq!(parse("##### deep"), "<p>##### deep</p>");
    }

    #[test]
    fn test_blank_line_outside_list() {
        assert_eq!(parse("a\n\nb"), "<p>a</p><br><p>b</p>");
    }

    #[test]
    fn test_trailing_newline_adds_nothing() {
        assert_eq!(parse("a\n"), "<p>a</p>");
        assert_eq!(parse("a\r\nb\r\n"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse(""), "");
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            parse("```python\nprint(\"hi\")\n```"),
            "<pre><code class=\"language-python\">print(&quot;hi&quot;)\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_content_is_literal() {
        assert_eq!(
            parse("```\n**bold**\n- item\n# head\n\n```"),
            "<pre><code>**bold**\n- item\n# head\n\n</code></pre>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            parse("- a\n- b"),
            "<ul><li style=\"margin-left: 0px;\">a</li><li style=\"margin-left: 0px;\">b</li></ul>"
        );
    }

    #[test]
    fn test_ordered_list_drops_source_numbers() {
        assert_eq!(
            parse("3. a\n7. b"),
            "<ol><li style=\"margin-left: 0px;\">a</li><li style=\"margin-left: 0px;\">b</li></ol>"
        );
    }

    #[test]
    fn test_blank_line_keeps_list_open() {
        assert_eq!(
            parse("- a\n\n- b"),
            "<ul><li style=\"margin-left: 0px;\">a</li><li style=\"margin-left: 0px;\">b</li></ul>"
        );
    }

    #[test]
    fn test_paragraph_closes_list() {
        assert_eq!(
            parse("- a\ntext"),
            "<ul><li style=\"margin-left: 0px;\">a</li></ul><p>text</p>"
        );
    }

    #[test]
    fn test_kind_change_switches_container() {
        assert_eq!(
            parse("- a\n1. b\n- [x] c"),
            "<ul><li style=\"margin-left: 0px;\">a</li></ul>\
             <ol><li style=\"margin-left: 0px;\">b</li></ol>\
             <ul><li style=\"margin-left: 0px;\"><input type=\"checkbox\" checked disabled>\
             <span class=\"done\">c</span></li></ul>"
        );
    }

    #[test]
    fn test_indent_is_offset_not_nesting() {
        assert_eq!(
            parse("- a\n  - b\n    - c"),
            "<ul><li style=\"margin-left: 0px;\">a</li>\
             <li style=\"margin-left: 20px;\">b</li>\
             <li style=\"margin-left: 40px;\">c</li></ul>"
        );
    }

    #[test]
    fn test_odd_indent_keeps_distinct_offsets() {
        assert_eq!(
            parse("- a\n - b\n   - c"),
            "<ul><li style=\"margin-left: 0px;\">a</li>\
             <li style=\"margin-left: 10px;\">b</li>\
             <li style=\"margin-left: 30px;\">c</li></ul>"
        );
    }

    #[test]
    fn test_fence_closes_open_list() {
        let rules = Rules::new();
        let options = bare_options();
        let mut parser = BlockParser::new(&options, &rules);
        parser.feed("- a");
        assert_eq!(parser.state().open_list, Some(ListKind::Unordered));
        parser.feed("```sh");
        assert_eq!(parser.state().open_list, None);
        assert!(parser.state().in_code_block);
        assert_eq!(parser.state().code_block_language, "sh");
        parser.feed("```");
        assert!(!parser.state().in_code_block);
        assert_eq!(parser.state().code_block_language, "");
        assert_eq!(
            parser.finish(),
            "<ul><li style=\"margin-left: 0px;\">a</li></ul><pre><code class=\"language-sh\"></code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence_closed_by_default() {
        assert_eq!(
            parse("```\nlet x;"),
            "<pre><code>let x;\n</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence_left_open() {
        let options = RenderOptions {
            unterminated_fence: FencePolicy::LeaveOpen,
            ..bare_options()
        };
        assert_eq!(parse_with("```\nlet x;", &options), "<pre><code>let x;\n");
    }

    #[test]
    fn test_list_closed_at_end_of_input() {
        assert_eq!(
            parse("1. only\n\n"),
            "<ol><li style=\"margin-left: 0px;\">only</li></ol>"
        );
    }

    #[test]
    fn test_inline_formatting_in_blocks() {
        assert_eq!(
            parse("## **Big** idea\n- use `x`"),
            "<h2><strong>Big</strong> idea</h2>\
             <ul><li style=\"margin-left: 0px;\">use <code>x</code></li></ul>"
        );
    }
}
