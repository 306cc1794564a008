//! Repository fetcher for the portfolio page.
//!
//! This library lists an account's public repositories from the GitHub REST
//! API with a bounded wait, drops noise (forks, undocumented repositories,
//! the profile repository), and falls back to embedded projects when the API
//! is unavailable.

pub mod api;
pub mod error;
pub mod fallback;
pub mod fetcher;
pub mod filter;

#[cfg(test)]
mod test_server;

pub use api::{AttemptPolicy, GitHubClient};
pub use error::FetchError;
pub use fallback::fallback_repositories;
pub use fetcher::{FetchOutcome, Repositories, RepositoryFetcher};
pub use filter::{retain_showcase, FilterReport};
