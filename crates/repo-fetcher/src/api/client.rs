//! GitHub API client with per-attempt time bounds.

use super::types::*;
use crate::error::FetchError;
use anyhow::{Context, Result};
use reqwest::{header::ACCEPT, Client};
use shared::GitHubConfig;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// How a single retrieval attempt is made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptPolicy {
    /// Bound on the whole attempt, body included
    pub timeout: Duration,
    /// Optional media type for content negotiation
    pub accept_header: Option<String>,
}

impl AttemptPolicy {
    /// First attempt: long bound, versioned media type
    pub fn primary(config: &GitHubConfig) -> Self {
        Self {
            timeout: config.primary_timeout(),
            accept_header: config.accept_header.clone(),
        }
    }

    /// Retry: shorter bound, no content negotiation
    pub fn retry(config: &GitHubConfig) -> Self {
        Self {
            timeout: config.retry_timeout(),
            accept_header: None,
        }
    }
}

/// GitHub REST API client for one account's repository listing
pub struct GitHubClient {
    /// HTTP client
    client: Client,
    /// Listing URL with query parameters
    repos_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client around an existing HTTP client
    pub fn with_client(client: Client, config: &GitHubConfig) -> Self {
        Self {
            client,
            repos_url: config.repos_url(),
        }
    }

    pub fn repos_url(&self) -> &str {
        &self.repos_url
    }

    /// Make one attempt at listing repositories
    ///
    /// The request future is dropped when the bound elapses, which aborts the
    /// in-flight request.
    pub async fn list_repositories(
        &self,
        policy: &AttemptPolicy,
    ) -> Result<Vec<GitHubRepository>, FetchError> {
        debug!(
            url = %self.repos_url,
            timeout_ms = policy.timeout.as_millis(),
            accept = policy.accept_header.as_deref().unwrap_or("-"),
            "Making API request"
        );

        match timeout(policy.timeout, self.request(policy)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                after: policy.timeout,
            }),
        }
    }

    async fn request(&self, policy: &AttemptPolicy) -> Result<Vec<GitHubRepository>, FetchError> {
        let mut request = self.client.get(&self.repos_url);
        if let Some(accept) = &policy.accept_header {
            request = request.header(ACCEPT, accept);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            // Try to parse error response
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GitHubError>(&error_text)
                .map(|e| e.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });

            return Err(FetchError::Remote { status, message });
        }

        let body = response.bytes().await?;
        let repositories: Vec<GitHubRepository> = serde_json::from_slice(&body)?;

        debug!(
            url = %self.repos_url,
            records = repositories.len(),
            "Request successful"
        );

        Ok(repositories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{Reply, StubServer};

    fn stub_config(base_url: &str) -> GitHubConfig {
        GitHubConfig {
            base_url: base_url.to_string(),
            primary_timeout_ms: 300,
            retry_timeout_ms: 200,
            ..Default::default()
        }
    }

    fn stub_client(config: &GitHubConfig) -> GitHubClient {
        let client = Client::builder().no_proxy().build().unwrap();
        GitHubClient::with_client(client, config)
    }

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new(&GitHubConfig::default());
        assert!(client.is_ok());
        assert_eq!(
            client.unwrap().repos_url(),
            "https://api.github.com/users/AleFuzeti/repos?sort=updated&per_page=100"
        );
    }

    #[test]
    fn test_attempt_policies() {
        let config = GitHubConfig::default();

        let primary = AttemptPolicy::primary(&config);
        assert_eq!(primary.timeout, Duration::from_secs(10));
        assert_eq!(
            primary.accept_header.as_deref(),
            Some("application/vnd.github.v3+json")
        );

        let retry = AttemptPolicy::retry(&config);
        assert_eq!(retry.timeout, Duration::from_secs(8));
        assert_eq!(retry.accept_header, None);
    }

    #[tokio::test]
    async fn test_success_sends_accept_header() {
        let server = StubServer::start(vec![Reply::json(
            200,
            r#"[{"name":"a","description":"d","language":null,"fork":false,"stargazers_count":0,"html_url":"u"}]"#,
        )])
        .await;
        let config = stub_config(&server.base_url);
        let client = stub_client(&config);

        let repos = client
            .list_repositories(&AttemptPolicy::primary(&config))
            .await
            .unwrap();
        assert_eq!(repos.len(), 1);

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("get /users/alefuzeti/repos?sort=updated&per_page=100 "));
        assert!(requests[0].contains("accept: application/vnd.github.v3+json"));
    }

    #[tokio::test]
    async fn test_stalled_request_times_out() {
        let server = StubServer::start(vec![Reply::Stall]).await;
        let config = stub_config(&server.base_url);
        let client = stub_client(&config);

        let error = client
            .list_repositories(&AttemptPolicy::retry(&config))
            .await
            .unwrap_err();
        assert!(error.is_timeout());
    }

    #[tokio::test]
    async fn test_error_status_carries_message() {
        let server = StubServer::start(vec![Reply::json(
            403,
            r#"{"message":"API rate limit exceeded"}"#,
        )])
        .await;
        let config = stub_config(&server.base_url);
        let client = stub_client(&config);

        match client
            .list_repositories(&AttemptPolicy::primary(&config))
            .await
        {
            Err(FetchError::Remote { status, message }) => {
                assert_eq!(status.as_u16(), 403);
                assert_eq!(message, "API rate limit exceeded");
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_without_json_body() {
        let server = StubServer::start(vec![Reply::json(502, "upstream down")]).await;
        let config = stub_config(&server.base_url);
        let client = stub_client(&config);

        match client
            .list_repositories(&AttemptPolicy::primary(&config))
            .await
        {
            Err(FetchError::Remote { status, message }) => {
                assert_eq!(status.as_u16(), 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_payload_error() {
        let server = StubServer::start(vec![Reply::json(200, r#"{"not":"a list"}"#)]).await;
        let config = stub_config(&server.base_url);
        let client = stub_client(&config);

        let error = client
            .list_repositories(&AttemptPolicy::primary(&config))
            .await
            .unwrap_err();
        assert!(matches!(error, FetchError::Payload(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Bind then drop a listener so the port is very likely closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = stub_config(&format!("http://{}", addr));
        let client = stub_client(&config);

        let error = client
            .list_repositories(&AttemptPolicy::primary(&config))
            .await
            .unwrap_err();
        assert!(matches!(error, FetchError::Transport(_)));
    }
}
