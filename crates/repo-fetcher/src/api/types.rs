//! GitHub API response types.
//!
//! These types represent the JSON responses from the repository listing
//! endpoint. Only the fields the portfolio uses are modelled.

use serde::{Deserialize, Serialize};
use shared::RawRepository;

/// Repository entry from `GET /users/{account}/repos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
}

impl From<GitHubRepository> for RawRepository {
    fn from(repo: GitHubRepository) -> Self {
        RawRepository {
            name: repo.name,
            description: repo.description,
            language: repo.language,
            fork: repo.fork,
            stargazers_count: repo.stargazers_count,
            html_url: repo.html_url,
            homepage: repo.homepage,
            site_url: None,
        }
    }
}

/// Error response from the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubError {
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
}
