//! Fallback markup for documents that could not be fetched

use showcase_core::escape_html;

use crate::category::Categorizer;
use crate::project::Repository;

/// Which document a repository is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// The repository README
    Readme,
    /// The dated markdown file of a note repository
    Note,
}

impl DocumentKind {
    pub fn for_repository(repo: &Repository, categorizer: &Categorizer) -> Self {
        if repo.topics.iter().any(|t| *t == categorizer.note_topic) {
            DocumentKind::Note
        } else {
            DocumentKind::Readme
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Readme => "readme",
            DocumentKind::Note => "note",
        }
    }
}

/// Markup shown in place of a document that is missing or failed to load
pub fn unavailable_notice(kind: DocumentKind) -> String {
    let label = escape_html(kind.label());
    format!(
        "<div class=\"text-center py-12\">\
         <p class=\"text-gray-500\">{label} not available</p>\
         <p class=\"text-sm text-gray-400 mt-2\">this repository may not have a {label} file</p>\
         </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_topics() {
        let categorizer = Categorizer::default();
        let note = Repository {
            topics: vec!["notes".to_string()],
            ..Repository::default()
        };
        assert_eq!(
            DocumentKind::for_repository(&note, &categorizer),
            DocumentKind::Note
        );
        assert_eq!(
            DocumentKind::for_repository(&Repository::default(), &categorizer),
            DocumentKind::Readme
        );
    }

    #[test]
    fn test_unavailable_notice() {
        let html = unavailable_notice(DocumentKind::Note);
        assert!(html.contains(">note not available</p>"));
        assert!(html.contains("may not have a note file"));
        assert!(unavailable_notice(DocumentKind::Readme).contains("readme not available"));
    }
}
