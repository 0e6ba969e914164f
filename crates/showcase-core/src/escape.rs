/// Escape literal text for insertion into HTML text or attribute positions.
///
/// Only `&`, `<`, `>`, `"` and `'` are replaced. Apply it once, to literal
/// text; it is not meant to be run over its own output.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}
