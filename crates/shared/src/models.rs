//! Data models for the portfolio pipeline.
//!
//! This module defines the repository records flowing from the fetcher to the
//! classifier, the category keys assigned to them, and the selection state
//! used by the presentation layer.

use serde::{Deserialize, Serialize};

/// Stable identity of a category in the registry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKey {
    DataScience,
    Websites,
    Other,
}

impl CategoryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::DataScience => "data-science",
            CategoryKey::Websites => "websites",
            CategoryKey::Other => "other",
        }
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CategoryKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data-science" => Ok(CategoryKey::DataScience),
            "websites" => Ok(CategoryKey::Websites),
            "other" => Ok(CategoryKey::Other),
            _ => Err(anyhow::anyhow!("Invalid category key: {}", s)),
        }
    }
}

/// Active category filter: everything, or a single registry category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(into = "String", try_from = "String")]
pub enum Selection {
    #[default]
    All,
    Category(CategoryKey),
}

impl Selection {
    /// Whether a record with the given key is visible under this selection
    pub fn includes(&self, key: CategoryKey) -> bool {
        match self {
            Selection::All => true,
            Selection::Category(selected) => *selected == key,
        }
    }
}

impl From<CategoryKey> for Selection {
    fn from(key: CategoryKey) -> Self {
        Selection::Category(key)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Category(key) => key.fmt(f),
        }
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        selection.to_string()
    }
}

impl TryFrom<String> for Selection {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for Selection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Selection::All);
        }
        s.parse::<CategoryKey>()
            .map(Selection::Category)
            .map_err(|_| anyhow::anyhow!("Invalid selection: {} (expected \"all\" or a category key)", s))
    }
}

/// Repository record as delivered by the remote listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawRepository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,

    // Supplementary site link, only carried by curated entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
}

impl RawRepository {
    /// Trimmed description for display (blank text reads as none)
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Homepage link if one is actually set (GitHub reports unset homepages as "")
    pub fn homepage_link(&self) -> Option<&str> {
        self.homepage
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }
}

/// Repository record with its assigned category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedRepository {
    #[serde(flatten)]
    pub repository: RawRepository,
    pub category: CategoryKey,
}

impl ClassifiedRepository {
    pub fn new(repository: RawRepository, category: CategoryKey) -> Self {
        Self {
            repository,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.repository.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_key_round_trip() {
        for key in [CategoryKey::DataScience, CategoryKey::Websites, CategoryKey::Other] {
            assert_eq!(key.to_string().parse::<CategoryKey>().unwrap(), key);
        }
        assert!("games".parse::<CategoryKey>().is_err());
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!(
            "websites".parse::<Selection>().unwrap(),
            Selection::Category(CategoryKey::Websites)
        );
        assert!("All".parse::<Selection>().is_err());
        assert_eq!(Selection::default(), Selection::All);
    }

    #[test]
    fn test_selection_includes() {
        assert!(Selection::All.includes(CategoryKey::Other));
        assert!(Selection::from(CategoryKey::Other).includes(CategoryKey::Other));
        assert!(!Selection::from(CategoryKey::Websites).includes(CategoryKey::Other));
    }

    #[test]
    fn test_deserialize_github_record() {
        let json = r#"{
            "id": 1,
            "name": "casamento-react",
            "description": "Site de casamento com react",
            "language": "JavaScript",
            "fork": false,
            "stargazers_count": 2,
            "html_url": "https://github.com/AleFuzeti/casamento-react",
            "homepage": ""
        }"#;

        let repo: RawRepository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "casamento-react");
        assert_eq!(repo.stargazers_count, 2);
        assert_eq!(repo.homepage_link(), None);
        assert_eq!(repo.site_url, None);
    }

    #[test]
    fn test_description_text_trims_for_display() {
        let repo = RawRepository {
            name: "x".to_string(),
            description: Some("   ".to_string()),
            language: None,
            fork: false,
            stargazers_count: 0,
            html_url: String::new(),
            homepage: None,
            site_url: None,
        };
        assert_eq!(repo.description_text(), None);
        assert_eq!(repo.description.as_deref(), Some("   "));

        let repo = RawRepository {
            description: Some("  Esquema 3d \n".to_string()),
            ..repo
        };
        assert_eq!(repo.description_text(), Some("Esquema 3d"));
    }

    #[test]
    fn test_classified_serializes_flat() {
        let classified = ClassifiedRepository::new(
            RawRepository {
                name: "Planetario".to_string(),
                description: Some("Esquema 3d".to_string()),
                language: Some("C".to_string()),
                fork: false,
                stargazers_count: 0,
                html_url: "https://github.com/AleFuzeti/Planetario".to_string(),
                homepage: None,
                site_url: None,
            },
            CategoryKey::Other,
        );

        let value = serde_json::to_value(&classified).unwrap();
        assert_eq!(value["name"], "Planetario");
        assert_eq!(value["category"], "other");
    }
}
