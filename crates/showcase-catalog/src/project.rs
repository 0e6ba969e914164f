//! Repository listings and the project cards derived from them

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::category::Categorizer;
use crate::title::format_title;
use crate::Result;

/// Pseudo-category that matches every project
pub const ALL: &str = "all";

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date pattern"));

/// One repository as returned by the hosting API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// A directory entry from a repository contents listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ContentEntry {
    fn is_markdown_file(&self) -> bool {
        self.kind == "file" && self.name.ends_with(".md")
    }
}

/// A card shown in the showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub tagline: String,
    pub category: String,
    #[serde(rename = "githubUrl")]
    pub github_url: String,
    pub image: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Project {
    pub fn from_repository(repo: &Repository, categorizer: &Categorizer) -> Self {
        let title = format_title(&repo.name);
        let category = categorizer.categorize(repo, &title);

        Self {
            id: repo.id,
            tagline: repo
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "No description available".to_string()),
            category,
            github_url: repo.html_url.clone(),
            image: format!("https://opengraph.githubassets.com/1/{}", repo.full_name),
            updated_at: repo.updated_at.clone(),
            language: repo.language.clone(),
            stars: repo.stargazers_count,
            topics: repo.topics.clone(),
            title,
        }
    }
}

/// The `YYYY-MM-DD` prefix of a repository name, if it has one
pub fn date_prefix(repo_name: &str) -> Option<&str> {
    DATE.find(repo_name).map(|m| m.as_str())
}

/// Keep date-prefixed repositories, newest name first
pub fn select_dated(repos: Vec<Repository>) -> Vec<Repository> {
    let mut dated: Vec<Repository> = repos
        .into_iter()
        .filter(|repo| {
            let keep = date_prefix(&repo.name).is_some();
            if !keep {
                log::debug!("skipping {} (no date prefix)", repo.name);
            }
            keep
        })
        .collect();

    dated.sort_by(|a, b| b.name.cmp(&a.name));
    dated
}

pub fn parse_repositories(json: &str) -> Result<Vec<Repository>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a saved list of project cards
pub fn parse_projects(json: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_entries(json: &str) -> Result<Vec<ContentEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a repository listing and turn the dated repositories into cards
pub fn load_projects(json: &str, categorizer: &Categorizer) -> Result<Vec<Project>> {
    let repos = select_dated(parse_repositories(json)?);
    log::debug!("{} dated repositories", repos.len());

    Ok(repos
        .iter()
        .map(|repo| Project::from_repository(repo, categorizer))
        .collect())
}

/// `"all"` followed by the distinct categories, sorted
pub fn categories(projects: &[Project]) -> Vec<String> {
    let distinct: BTreeSet<&str> = projects
        .iter()
        .map(|p| p.category.as_str())
        .filter(|c| *c != ALL)
        .collect();

    std::iter::once(ALL.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}

pub fn filter_by_category<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL || p.category == category)
        .collect()
}

/// Choose the markdown file holding a note.
///
/// Prefers a `.md` file whose name contains the repository's date prefix,
/// falling back to the first `.md` file.
pub fn pick_note_file<'a>(repo: &str, entries: &'a [ContentEntry]) -> Option<&'a ContentEntry> {
    let repo_name = repo.rsplit('/').next().unwrap_or(repo);
    let date = date_prefix(repo_name);

    entries
        .iter()
        .find(|entry| entry.is_markdown_file() && date.map_or(true, |d| entry.name.contains(d)))
        .or_else(|| entries.iter().find(|entry| entry.is_markdown_file()))
}
