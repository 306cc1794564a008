//! Repository retrieval with a bounded wait and a local fallback.
//!
//! One retrieval cycle makes at most two sequential attempts: the primary
//! attempt with content negotiation, then a single shorter retry without it.
//! If both fail, the embedded fallback projects are returned together with a
//! diagnostic message. Retrieval never fails observably.

use crate::api::{AttemptPolicy, GitHubClient};
use crate::error::FetchError;
use crate::fallback::fallback_repositories;
use crate::filter::retain_showcase;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{ClassifiedRepository, GitHubConfig, RawRepository};
use tracing::{info, warn};

/// Where the repositories of a cycle came from
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum Repositories {
    /// Filtered listing from the API, still to be classified
    Live { repositories: Vec<RawRepository> },
    /// Embedded, pre-classified projects used after retrieval failed
    Fallback {
        repositories: Vec<ClassifiedRepository>,
        diagnostic: String,
    },
}

/// Result of one retrieval cycle
#[derive(Debug, Clone, Serialize)]
pub struct FetchOutcome {
    #[serde(flatten)]
    pub repositories: Repositories,
    /// Network attempts made (1 or 2)
    pub attempts: u32,
    pub fetched_at: DateTime<Utc>,
}

impl FetchOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.repositories, Repositories::Fallback { .. })
    }

    /// Failure message to display alongside fallback data
    pub fn diagnostic(&self) -> Option<&str> {
        match &self.repositories {
            Repositories::Live { .. } => None,
            Repositories::Fallback { diagnostic, .. } => Some(diagnostic.as_str()),
        }
    }

    pub fn len(&self) -> usize {
        match &self.repositories {
            Repositories::Live { repositories } => repositories.len(),
            Repositories::Fallback { repositories, .. } => repositories.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fetches the showcase repositories of one account
pub struct RepositoryFetcher {
    client: GitHubClient,
    primary: AttemptPolicy,
    retry: AttemptPolicy,
    excluded_repository: String,
}

impl RepositoryFetcher {
    /// Create a new fetcher
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = GitHubClient::new(config)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a fetcher around an existing API client
    pub fn with_client(client: GitHubClient, config: &GitHubConfig) -> Self {
        Self {
            client,
            primary: AttemptPolicy::primary(config),
            retry: AttemptPolicy::retry(config),
            excluded_repository: config.excluded_repository().to_string(),
        }
    }

    /// Run one retrieval cycle
    pub async fn fetch_repositories(&self) -> FetchOutcome {
        let (result, attempts) = self.retrieve().await;

        let repositories = match result {
            Ok(records) => {
                let (kept, report) = retain_showcase(records, &self.excluded_repository);
                info!(
                    kept = report.kept,
                    forks = report.forks,
                    undocumented = report.undocumented,
                    profile = report.profile,
                    attempts = attempts,
                    "Fetched repositories from GitHub"
                );
                Repositories::Live { repositories: kept }
            }
            Err(e) => {
                let diagnostic = e.diagnostic();
                warn!(
                    error = %e,
                    timeout = e.is_timeout(),
                    attempts = attempts,
                    "Using fallback projects"
                );
                Repositories::Fallback {
                    repositories: fallback_repositories(),
                    diagnostic,
                }
            }
        };

        FetchOutcome {
            repositories,
            attempts,
            fetched_at: Utc::now(),
        }
    }

    /// Primary attempt, then at most one retry
    async fn retrieve(&self) -> (Result<Vec<RawRepository>, FetchError>, u32) {
        match self.client.list_repositories(&self.primary).await {
            Ok(records) => return (Ok(records.into_iter().map(Into::into).collect()), 1),
            Err(e) => {
                warn!(error = %e, "First attempt failed, retrying without Accept header");
            }
        }

        let result: Result<Vec<RawRepository>, FetchError> = self
            .client
            .list_repositories(&self.retry)
            .await
            .map(|records| records.into_iter().map(Into::into).collect());

        (result, 2)
    }
}
