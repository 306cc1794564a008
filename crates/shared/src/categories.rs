//! Category registry.
//!
//! Fixed, ordered set of portfolio categories with their display identity and
//! matching rules. Registry order is display order and also the order in
//! which rules are evaluated. The last entry is the reserved fallback whose
//! rules are never consulted.

use crate::models::CategoryKey;

/// Category with display identity and matching rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: CategoryKey,
    pub name: &'static str,
    pub icon: &'static str,
    /// Lowercase keywords, matched as substrings
    pub keywords: &'static [&'static str],
    /// Language names that imply membership (exact match)
    pub languages: &'static [&'static str],
}

impl Category {
    /// Whether this is the reserved fallback category
    pub fn is_fallback(&self) -> bool {
        self.key == FALLBACK
    }

    /// Case-insensitive substring test against name OR description
    pub fn matches_keywords(&self, name: &str, description: &str) -> bool {
        let name = name.to_lowercase();
        let description = description.to_lowercase();

        self.keywords
            .iter()
            .any(|keyword| name.contains(keyword) || description.contains(keyword))
    }

    pub fn matches_language(&self, language: &str) -> bool {
        self.languages.contains(&language)
    }

    /// Display label, e.g. "🔬 Data Science"
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// Key of the reserved fallback category
pub const FALLBACK: CategoryKey = CategoryKey::Other;

static CATEGORIES: [Category; 3] = [
    Category {
        key: CategoryKey::DataScience,
        name: "Data Science",
        icon: "🔬",
        keywords: &[
            "visão computacional",
            "redes neurais convolucionais",
            "analise",
            "simulação",
        ],
        languages: &["Jupyter Notebook"],
    },
    Category {
        key: CategoryKey::Websites,
        name: "Websites e Apps",
        icon: "🌐",
        keywords: &["site", "apps", "web", "react", "google"],
        languages: &[],
    },
    Category {
        key: CategoryKey::Other,
        name: "Outros",
        icon: "🛠️",
        keywords: &["jogo", "computação gráfica"],
        languages: &[],
    },
];

/// All categories in registry order, fallback included
pub fn all() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category by key
pub fn get(key: CategoryKey) -> &'static Category {
    // Every CategoryKey variant has a registry entry (checked in tests)
    CATEGORIES
        .iter()
        .find(|c| c.key == key)
        .unwrap_or_else(fallback)
}

/// The reserved fallback category
pub fn fallback() -> &'static Category {
    &CATEGORIES[CATEGORIES.len() - 1]
}

/// Categories whose rules take part in matching, in registry order
pub fn rule_categories() -> impl Iterator<Item = &'static Category> {
    CATEGORIES.iter().filter(|c| !c.is_fallback())
}

/// First category (registry order) with a keyword matching name or description
pub fn resolve_keyword_match(name: &str, description: &str) -> Option<&'static Category> {
    rule_categories().find(|c| c.matches_keywords(name, description))
}

/// First category (registry order) listing the given language
pub fn resolve_language_match(language: &str) -> Option<&'static Category> {
    rule_categories().find(|c| c.matches_language(language))
}
