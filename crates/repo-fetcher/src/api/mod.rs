//! GitHub REST API client implementation.
//!
//! This module provides a single-request client for the public repository
//! listing endpoint. Each call is one attempt bounded by its own timeout;
//! retry policy lives in the fetcher.

pub mod client;
pub mod types;

pub use client::{AttemptPolicy, GitHubClient};
pub use types::*;
