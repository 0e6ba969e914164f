//! Category assignment for repositories

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::project::Repository;

/// Category given to note repositories
pub const NOTES: &str = "Notes";

/// Category used when nothing else matches
pub const DEVELOPMENT: &str = "Development";

/// Exact repository names with a fixed category, checked before keywords
const BUILT_IN_OVERRIDES: &[(&str, &str)] = &[
    ("2025-09-02-support-ab-testing", "Analytics & Testing"),
    ("2025-08-28-payments-flow", "E-commerce"),
    ("2025-08-29-isometric-imgen", "AI Generative Media"),
    ("2025-08-26-user-analytics-v2", "User Research"),
    ("2025-08-27-user-analytics", "User Research"),
    ("2025-08-25-landing-onboarding-flow", "User Experience"),
];

/// Substring rules checked in order against the repository name
const KEYWORDS: &[(&[&str], &str)] = &[
    (&["support", "ab_testing", "analytics"], "Analytics & Testing"),
    (&["payment", "commerce"], "E-commerce"),
    (&["user", "feedback"], "User Research"),
    (&["ai", "image", "gen", "isometric"], "AI Generative Media"),
    (&["landing", "onboarding"], "User Experience"),
];

/// Assigns display categories to repositories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Categorizer {
    /// Exact repository names mapped to a category, checked before keywords.
    /// Starts from the built-in names; entries from config are added on top.
    #[serde(deserialize_with = "merge_overrides")]
    pub overrides: IndexMap<String, String>,

    /// Topic that marks a repository as a note
    pub note_topic: String,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self {
            overrides: built_in_overrides(),
            note_topic: "notes".to_string(),
        }
    }
}

fn built_in_overrides() -> IndexMap<String, String> {
    BUILT_IN_OVERRIDES
        .iter()
        .map(|(name, category)| (name.to_string(), category.to_string()))
        .collect()
}

fn merge_overrides<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let configured = IndexMap::<String, String>::deserialize(deserializer)?;
    let mut overrides = built_in_overrides();
    overrides.extend(configured);
    Ok(overrides)
}

impl Categorizer {
    /// Add an exact-name override
    pub fn with_override(mut self, repo_name: &str, category: &str) -> Self {
        self.overrides
            .insert(repo_name.to_string(), category.to_string());
        self
    }

    /// Category from the repository name alone
    pub fn category_for_name(&self, repo_name: &str) -> String {
        if let Some(category) = self.overrides.get(repo_name) {
            return category.clone();
        }

        KEYWORDS
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| repo_name.contains(n)))
            .map(|(_, category)| category.to_string())
            .unwrap_or_else(|| DEVELOPMENT.to_string())
    }

    /// A note carries the note topic or has "daily notes" in its title
    pub fn is_note(&self, repo: &Repository, title: &str) -> bool {
        repo.topics.iter().any(|topic| *topic == self.note_topic)
            || title.to_lowercase().contains("daily notes")
    }

    /// Category for a repository whose display title is already known
    pub fn categorize(&self, repo: &Repository, title: &str) -> String {
        if self.is_note(repo, title) {
            NOTES.to_string()
        } else {
            self.category_for_name(&repo.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn repo(name: &str, topics: &[&str]) -> Repository {
        Repository {
            name: name.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            ..Repository::default()
        }
    }

    #[rstest]
    #[case("2025-09-02-support-ab-testing", "Analytics & Testing")]
    #[case("2025-08-28-payments-flow", "E-commerce")]
    #[case("2025-08-29-isometric-imgen", "AI Generative Media")]
    #[case("2025-08-27-user-research", "User Research")]
    #[case("2025-08-25-landing-onboarding-flow", "User Experience")]
    #[case("2025-08-20-rust-cli", "Development")]
    #[case("2025-08-26-user-analytics-v2", "User Research")]
    #[case("2025-08-27-user-analytics", "User Research")]
    #[case("2025-08-30-user-analytics-v3", "Analytics & Testing")]
    #[case("2025-09-03-feedback-board", "User Research")]
    fn test_default_categories(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(Categorizer::default().category_for_name(name), expected);
    }

    #[test]
    fn test_override_wins() {
        let categorizer = Categorizer::default()
            .with_override("2025-08-30-user-analytics-v3", "User Research")
            .with_override("2025-08-28-payments-flow", "Development");
        assert_eq!(
            categorizer.category_for_name("2025-08-30-user-analytics-v3"),
            "User Research"
        );
        assert_eq!(
            categorizer.category_for_name("2025-08-28-payments-flow"),
            "Development"
        );
        assert_eq!(
            categorizer.category_for_name("2025-08-27-user-analytics"),
            "User Research"
        );
        assert_eq!(
            categorizer.category_for_name("2025-08-31-user-analytics"),
            "Analytics & Testing"
        );
    }

    #[test]
    fn test_configured_overrides_extend_built_ins() {
        let categorizer: Categorizer = serde_json::from_str(
            r#"{"overrides": {"2025-09-05-dotfiles": "Tooling", "2025-08-29-isometric-imgen": "Art"}}"#,
        )
        .unwrap();
        assert_eq!(categorizer.category_for_name("2025-09-05-dotfiles"), "Tooling");
        assert_eq!(categorizer.category_for_name("2025-08-29-isometric-imgen"), "Art");
        assert_eq!(
            categorizer.category_for_name("2025-08-27-user-analytics"),
            "User Research"
        );
        assert_eq!(categorizer.note_topic, "notes");

        let unconfigured: Categorizer = serde_json::from_str("{}").unwrap();
        assert_eq!(unconfigured, Categorizer::default());
    }

    #[test]
    fn test_notes_by_topic_or_title() {
        let categorizer = Categorizer::default();

        let tagged = repo("2025-09-01-thoughts", &["notes"]);
        assert_eq!(categorizer.categorize(&tagged, "Thoughts"), NOTES);

        let titled = repo("2025-09-01-daily-notes", &[]);
        assert_eq!(categorizer.categorize(&titled, "Daily Notes"), NOTES);

        let plain = repo("2025-09-01-payment-api", &["rust"]);
        assert_eq!(categorizer.categorize(&plain, "Payment API"), "E-commerce");
    }

    #[test]
    fn test_custom_note_topic() {
        let categorizer = Categorizer {
            note_topic: "journal".to_string(),
            ..Categorizer::default()
        };
        assert!(categorizer.is_note(&repo("x", &["journal"]), "X"));
        assert!(!categorizer.is_note(&repo("x", &["notes"]), "X"));
    }
}
