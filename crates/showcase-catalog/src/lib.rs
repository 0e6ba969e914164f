//! showcase-catalog - repository metadata to project cards
//!
//! Pure helpers around the repository listing of a hosting API: which
//! repositories are shown (date-prefixed ones), how they are titled and
//! categorised, which markdown file holds a note, and the notice shown when a
//! document cannot be fetched. Fetching itself happens elsewhere; this crate
//! only consumes the JSON it returns.
//!
//! # Example
//!
//! ```rust
//! use showcase_catalog::{format_title, Categorizer};
//!
//! assert_eq!(format_title("2025-09-02-support-ab-testing"), "Support A/B Testing");
//!
//! let categorizer = Categorizer::default();
//! assert_eq!(categorizer.category_for_name("2025-08-28-payments-flow"), "E-commerce");
//! ```

mod category;
mod notice;
mod project;
mod title;

pub use category::Categorizer;
pub use notice::{unavailable_notice, DocumentKind};
pub use project::{
    categories, date_prefix, filter_by_category, load_projects, parse_entries, parse_projects,
    parse_repositories, pick_note_file, select_dated, ContentEntry, Project, Repository, ALL,
};
pub use title::format_title;

/// Error type for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid listing: {0}")]
    InvalidListing(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
