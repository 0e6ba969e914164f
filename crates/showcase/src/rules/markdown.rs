//! Built-in line rules.

use once_cell::sync::Lazy;
use regex::Regex;
use showcase_core::Block;

use super::LineRule;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,4}) (.*)$").expect("heading pattern"));

static TASK_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([ \t]*)- \[([ xX])\][ \t]*(.*)$").expect("task item pattern")
});

static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)[-*+][ \t]+(.*)$").expect("unordered item pattern"));

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)[0-9]+\.[ \t]+(.*)$").expect("ordered item pattern"));

/// Create the block rules in priority order
pub fn block_rules() -> Vec<LineRule> {
    vec![
        LineRule::new("heading", heading),
        LineRule::new("task", task_item),
        LineRule::new("unordered", unordered_item),
        LineRule::new("ordered", ordered_item),
    ]
}

/// Width of the leading whitespace run; spaces and tabs count one each
fn indent_columns(leading: &str) -> usize {
    leading.len()
}

fn heading(line: &str) -> Option<Block<'_>> {
    let caps = HEADING.captures(line)?;
    let level = caps.get(1)?.as_str().len() as u8;
    let text = caps.get(2)?.as_str();
    Some(Block::Heading { level, text })
}

fn task_item(line: &str) -> Option<Block<'_>> {
    let caps = TASK_ITEM.captures(line)?;
    let leading = caps.get(1)?.as_str();
    let checked = matches!(caps.get(2)?.as_str(), "x" | "X");
    let text = caps.get(3)?.as_str();
    Some(Block::TaskListItem {
        indent_columns: indent_columns(leading),
        checked,
        text,
    })
}

fn unordered_item(line: &str) -> Option<Block<'_>> {
    let caps = UNORDERED_ITEM.captures(line)?;
    Some(Block::UnorderedListItem {
        indent_columns: indent_columns(caps.get(1)?.as_str()),
        text: caps.get(2)?.as_str(),
    })
}

fn ordered_item(line: &str) -> Option<Block<'_>> {
    let caps = ORDERED_ITEM.captures(line)?;
    Some(Block::OrderedListItem {
        indent_columns: indent_columns(caps.get(1)?.as_str()),
        text: caps.get(2)?.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("## Sub", 2, "Sub")]
    #[case("### Third", 3, "Third")]
    #[case("#### Fourth level", 4, "Fourth level")]
    #[case("# ", 1, "")]
    #[case("## **bold** heading", 2, "**bold** heading")]
    fn test_heading(#[case] line: &str, #[case] level: u8, #[case] text: &str) {
        assert_eq!(heading(line), Some(Block::Heading { level, text }));
    }

    #[rstest]
    #[case("##### Five")]
    #[case("#NoSpace")]
    #[case(" # indented")]
    #[case("plain")]
    fn test_not_heading(#[case] line: &str) {
        assert_eq!(heading(line), None);
    }

    #[rstest]
    #[case("- [ ] todo", 0, false, "todo")]
    #[case("- [x] done", 0, true, "done")]
    #[case("- [X] Done", 0, true, "Done")]
    #[case("  - [ ] nested", 2, false, "nested")]
    #[case("    - [x] deeper", 4, true, "deeper")]
    #[case(" - [ ] one", 1, false, "one")]
    #[case("   - [ ] odd", 3, false, "odd")]
    #[case("- [x]tight", 0, true, "tight")]
    fn test_task_item(
        #[case] line: &str,
        #[case] indent_columns: usize,
        #[case] checked: bool,
        #[case] text: &str,
    ) {
        assert_eq!(
            task_item(line),
            Some(Block::TaskListItem {
                indent_columns,
                checked,
                text
            })
        );
    }

    #[rstest]
    #[case("- [y] nope")]
    #[case("* [ ] star box")]
    #[case("-[ ] no space")]
    fn test_not_task_item(#[case] line: &str) {
        assert_eq!(task_item(line), None);
    }

    #[rstest]
    #[case("- dash", 0, "dash")]
    #[case("* star", 0, "star")]
    #[case("+ plus", 0, "plus")]
    #[case(" - one", 1, "one")]
    #[case("  - two", 2, "two")]
    #[case("   - three", 3, "three")]
    #[case("    -   four", 4, "four")]
    #[case("\t- tab", 1, "tab")]
    #[case("- [y] box-like", 0, "[y] box-like")]
    fn test_unordered_item(#[case] line: &str, #[case] indent_columns: usize, #[case] text: &str) {
        assert_eq!(
            unordered_item(line),
            Some(Block::UnorderedListItem { indent_columns, text })
        );
    }

    #[rstest]
    #[case("-dash")]
    #[case("**bold** start")]
    #[case("--- rule")]
    fn test_not_unordered_item(#[case] line: &str) {
        assert_eq!(unordered_item(line), None);
    }

    #[rstest]
    #[case("1. first", 0, "first")]
    #[case("42. answer", 0, "answer")]
    #[case("  3. indented", 2, "indented")]
    #[case(" 4. odd", 1, "odd")]
    fn test_ordered_item(#[case] line: &str, #[case] indent_columns: usize, #[case] text: &str) {
        assert_eq!(
            ordered_item(line),
            Some(Block::OrderedListItem { indent_columns, text })
        );
    }

    #[rstest]
    #[case("1.no space")]
    #[case("1) paren")]
    #[case("a. letter")]
    fn test_not_ordered_item(#[case] line: &str) {
        assert_eq!(ordered_item(line), None);
    }
}
