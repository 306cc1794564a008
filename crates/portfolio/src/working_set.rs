//! The in-memory working set held by the presentation layer.

use crate::classifier::classify_all;
use crate::filter::{count_by_category, filter_by_category};
use repo_fetcher::{FetchOutcome, Repositories};
use shared::{ClassifiedRepository, Selection};
use tracing::debug;

/// Classified repositories of the current render cycle plus the active selection
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    repositories: Vec<ClassifiedRepository>,
    selection: Selection,
    diagnostic: Option<String>,
}

impl WorkingSet {
    pub fn new(repositories: Vec<ClassifiedRepository>, diagnostic: Option<String>) -> Self {
        Self {
            repositories,
            selection: Selection::All,
            diagnostic,
        }
    }

    /// Build from a retrieval cycle; fallback projects keep their assigned category
    pub fn from_outcome(outcome: FetchOutcome) -> Self {
        match outcome.repositories {
            Repositories::Live { repositories } => {
                let classified = classify_all(repositories);
                debug!(repositories = classified.len(), "Classified live repositories");
                Self::new(classified, None)
            }
            Repositories::Fallback {
                repositories,
                diagnostic,
            } => Self::new(repositories, Some(diagnostic)),
        }
    }

    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn all(&self) -> &[ClassifiedRepository] {
        &self.repositories
    }

    /// Records visible under the active selection
    pub fn visible(&self) -> Vec<&ClassifiedRepository> {
        filter_by_category(&self.repositories, self.selection)
    }

    pub fn count(&self, selection: Selection) -> usize {
        count_by_category(&self.repositories, selection)
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    pub fn is_fallback(&self) -> bool {
        self.diagnostic.is_some()
    }
}
