//! Shared library for the portfolio pipeline.
//!
//! This crate provides common functionality used by the fetcher and the
//! portfolio crates:
//! - Configuration management
//! - Logging infrastructure
//! - Repository and category data models
//! - The category registry

pub mod categories;
pub mod config;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use categories::Category;
pub use config::{Config, GitHubConfig, SiteConfig};
pub use logging::LogConfig;
pub use models::*;
