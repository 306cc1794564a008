//! Portfolio library: classification and filtering of fetched repositories.
//!
//! Assigns every repository exactly one category from the shared registry,
//! answers filtered and counted views for the active selection, and builds
//! the page model a renderer consumes.

pub mod classifier;
pub mod filter;
pub mod page;
pub mod working_set;

pub use classifier::{classify, classify_all, MatchReason};
pub use filter::{count_by_category, filter_by_category};
pub use page::PageModel;
pub use working_set::WorkingSet;
