//! Rule-based repository classification.
//!
//! Categories are tried in registry order; the first whose language or
//! keyword rule matches wins. Keywords are naive case-insensitive substring
//! tests against the name and the description. Anything unmatched goes to
//! the fallback category.

use shared::categories;
use shared::{CategoryKey, ClassifiedRepository, RawRepository};
use tracing::trace;

/// Which rule decided a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    Language,
    Keyword,
    Fallback,
}

/// Classify and report which rule matched
pub fn classify_with_reason(repo: &RawRepository) -> (CategoryKey, MatchReason) {
    let description = repo.description.as_deref().unwrap_or("");
    let language = repo.language.as_deref().unwrap_or("");

    for category in categories::rule_categories() {
        if category.matches_language(language) {
            return (category.key, MatchReason::Language);
        }
        if category.matches_keywords(&repo.name, description) {
            return (category.key, MatchReason::Keyword);
        }
    }

    (categories::FALLBACK, MatchReason::Fallback)
}

/// Category key for a repository (total: always a registry key)
pub fn classify(repo: &RawRepository) -> CategoryKey {
    let (key, reason) = classify_with_reason(repo);
    trace!(
        name = %repo.name,
        language = repo.language.as_deref().unwrap_or(""),
        category = %key,
        reason = ?reason,
        "Categorized project"
    );
    key
}

/// Classify a fetched listing, keeping its order
pub fn classify_all(repos: Vec<RawRepository>) -> Vec<ClassifiedRepository> {
    repos
        .into_iter()
        .map(|repo| {
            let category = classify(&repo);
            ClassifiedRepository::new(repo, category)
        })
        .collect()
}
