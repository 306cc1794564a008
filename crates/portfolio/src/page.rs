//! Page model for renderers.
//!
//! Turns the working set into the category controls, the heading and the
//! project cards of the portfolio page. The deployment prefix comes from the
//! `[site]` configuration, so a single page serves every deployment path.

use crate::working_set::WorkingSet;
use serde::Serialize;
use shared::categories;
use shared::{CategoryKey, ClassifiedRepository, Selection, SiteConfig};
use std::fmt::Write;

const ALL_ICON: &str = "📁";
const ALL_LABEL: &str = "Todos";
const ALL_HEADING: &str = "Todos os Projetos";
const EMPTY_MESSAGE: &str = "🔍 Nenhum projeto encontrado nesta categoria";

/// One category filter button
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryControl {
    pub selection: Selection,
    pub icon: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// One project card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub category: CategoryKey,
    pub badge: String,
    pub language: Option<String>,
    /// Only set when the repository has stars
    pub stars: Option<u64>,
    pub code_url: String,
    pub demo_url: Option<String>,
    pub site_url: Option<String>,
}

impl From<&ClassifiedRepository> for ProjectCard {
    fn from(repo: &ClassifiedRepository) -> Self {
        let raw = &repo.repository;
        Self {
            name: raw.name.clone(),
            description: raw.description_text().unwrap_or_default().to_string(),
            category: repo.category,
            badge: categories::get(repo.category).label(),
            language: raw.language.clone().filter(|l| !l.is_empty()),
            stars: Some(raw.stargazers_count).filter(|&s| s > 0),
            code_url: raw.html_url.clone(),
            demo_url: raw.homepage_link().map(str::to_string),
            site_url: raw.site_url.clone(),
        }
    }
}

/// Everything a renderer needs for one render cycle
#[derive(Debug, Clone, Serialize)]
pub struct PageModel {
    pub asset_prefix: String,
    pub controls: Vec<CategoryControl>,
    pub heading: String,
    pub projects: Vec<ProjectCard>,
    pub empty_message: Option<String>,
    pub diagnostic: Option<String>,
}

impl PageModel {
    pub fn build(set: &WorkingSet, site: &SiteConfig) -> Self {
        let active = set.selection();

        let mut controls = vec![CategoryControl {
            selection: Selection::All,
            icon: ALL_ICON.to_string(),
            label: ALL_LABEL.to_string(),
            count: set.count(Selection::All),
            active: active == Selection::All,
        }];
        controls.extend(categories::all().iter().map(|category| {
            let selection = Selection::Category(category.key);
            CategoryControl {
                selection,
                icon: category.icon.to_string(),
                label: category.name.to_string(),
                count: set.count(selection),
                active: active == selection,
            }
        }));

        let projects: Vec<ProjectCard> = set.visible().into_iter().map(ProjectCard::from).collect();

        let heading = match active {
            Selection::All => format!("{} {} ({})", ALL_ICON, ALL_HEADING, projects.len()),
            Selection::Category(key) => {
                format!("{} ({})", categories::get(key).label(), projects.len())
            }
        };

        let empty_message = projects.is_empty().then(|| EMPTY_MESSAGE.to_string());

        Self {
            asset_prefix: site.asset_prefix(),
            controls,
            heading,
            projects,
            empty_message,
            diagnostic: set.diagnostic().map(str::to_string),
        }
    }

    /// Plain-text rendering for the terminal
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(diagnostic) = &self.diagnostic {
            let _ = writeln!(out, "⚠️  {} (showing saved projects)", diagnostic);
            out.push('\n');
        }

        let controls: Vec<String> = self
            .controls
            .iter()
            .map(|c| {
                let text = format!("{} {} ({})", c.icon, c.label, c.count);
                if c.active {
                    format!("[{}]", text)
                } else {
                    text
                }
            })
            .collect();
        let _ = writeln!(out, "{}", controls.join("  "));
        out.push('\n');

        let _ = writeln!(out, "{}", self.heading);

        for card in &self.projects {
            out.push('\n');
            let _ = writeln!(out, "{}  {}", card.name, card.badge);
            let _ = writeln!(out, "  {}", card.description);

            let mut badges = Vec::new();
            if let Some(language) = &card.language {
                badges.push(language.clone());
            }
            if let Some(stars) = card.stars {
                badges.push(format!("⭐ {}", stars));
            }
            if !badges.is_empty() {
                let _ = writeln!(out, "  {}", badges.join(" · "));
            }

            let _ = writeln!(out, "  Ver Código: {}", card.code_url);
            if let Some(demo) = &card.demo_url {
                let _ = writeln!(out, "  Demo: {}", demo);
            }
            if let Some(site) = &card.site_url {
                let _ = writeln!(out, "  Site: {}", site);
            }
        }

        if let Some(message) = &self.empty_message {
            out.push('\n');
            let _ = writeln!(out, "{}", message);
        }

        out
    }
}
