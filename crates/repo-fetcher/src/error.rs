//! Failure taxonomy for repository retrieval.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Why a retrieval attempt failed
#[derive(Error, Debug)]
pub enum FetchError {
    /// The attempt exceeded its time bound and was cancelled
    #[error("request timed out after {}ms", .after.as_millis())]
    Timeout { after: Duration },

    /// Non-success status from the API
    #[error("GitHub API returned {status}: {message}")]
    Remote { status: StatusCode, message: String },

    /// Success status but the body is not a repository listing
    #[error("malformed response payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Network unreachable, DNS failure, connection reset
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }

    /// Human-readable message shown next to the fallback projects
    pub fn diagnostic(&self) -> String {
        match self {
            FetchError::Timeout { .. } => {
                "Timeout: the GitHub API took too long to respond".to_string()
            }
            FetchError::Remote { status, message } => {
                format!("GitHub API error: {} - {}", status.as_u16(), message)
            }
            FetchError::Payload(_) => {
                "GitHub API error: unexpected response format".to_string()
            }
            FetchError::Transport(e) => format!("Could not reach the GitHub API: {}", e),
        }
    }
}
