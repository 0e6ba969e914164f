use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DATE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}-").expect("date prefix pattern"));

// ASCII word boundary followed by an ASCII word character
static WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b\w)").expect("word start pattern"));

/// Fix-ups applied after capitalisation, in order
const FIXUPS: &[(&str, &str)] = &[
    ("Ab Testing", "A/B Testing"),
    ("Ai ", "AI "),
    ("Api", "API"),
    ("Ui", "UI"),
    ("Ux", "UX"),
];

/// Turn a repository name into a display title.
///
/// The `YYYY-MM-DD-` prefix is dropped, dashes and underscores become spaces
/// and every word is capitalised.
pub fn format_title(repo_name: &str) -> String {
    let name = DATE_PREFIX.replace(repo_name, "");
    let spaced = name.replace(['-', '_'], " ");

    let mut title = WORD_START
        .replace_all(&spaced, |caps: &Captures| caps[0].to_ascii_uppercase())
        .into_owned();

    for (from, to) in FIXUPS {
        title = title.replace(from, to);
    }
    title
}
