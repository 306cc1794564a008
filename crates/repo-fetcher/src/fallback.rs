//! Embedded fallback projects.
//!
//! Shown whenever the GitHub API cannot be reached. Each entry carries a
//! hand-assigned category that agrees with what the classifier would pick.

use shared::{CategoryKey, ClassifiedRepository, RawRepository};

const PROFILE_URL: &str = "https://github.com/AleFuzeti";

struct Entry {
    name: &'static str,
    description: &'static str,
    language: Option<&'static str>,
    stars: u64,
    homepage: Option<&'static str>,
    site_url: Option<&'static str>,
    category: CategoryKey,
}

const ENTRIES: [Entry; 6] = [
    Entry {
        name: "CNN-LIBRAS",
        description: "Redes neurais convolucionais para reconhecimento do alfabeto de LIBRAS",
        language: Some("Jupyter Notebook"),
        stars: 2,
        homepage: None,
        site_url: None,
        category: CategoryKey::DataScience,
    },
    Entry {
        name: "Visao-Computacional",
        description: "Trabalhos de visão computacional com OpenCV",
        language: Some("Python"),
        stars: 1,
        homepage: None,
        site_url: None,
        category: CategoryKey::DataScience,
    },
    Entry {
        name: "casamento-react",
        description: "Site de casamento com react",
        language: Some("JavaScript"),
        stars: 1,
        homepage: Some("https://alefuzeti.github.io/casamento-react"),
        site_url: None,
        category: CategoryKey::Websites,
    },
    Entry {
        name: "meu-portfolio",
        description: "Portfólio web com a lista dos meus projetos do GitHub",
        language: Some("JavaScript"),
        stars: 0,
        homepage: None,
        site_url: Some("https://alefuzeti.github.io/github/"),
        category: CategoryKey::Websites,
    },
    Entry {
        name: "Planetario",
        description: "Esquema 3d do sistema solar feito para a disciplina de Computação Gráfica",
        language: Some("C"),
        stars: 0,
        homepage: None,
        site_url: None,
        category: CategoryKey::Other,
    },
    Entry {
        name: "Jogo-da-Velha",
        description: "Jogo da velha em C para o terminal",
        language: Some("C"),
        stars: 0,
        homepage: None,
        site_url: None,
        category: CategoryKey::Other,
    },
];

/// The fixed fallback sequence, already classified
pub fn fallback_repositories() -> Vec<ClassifiedRepository> {
    ENTRIES
        .iter()
        .map(|entry| {
            ClassifiedRepository::new(
                RawRepository {
                    name: entry.name.to_string(),
                    description: Some(entry.description.to_string()),
                    language: entry.language.map(str::to_string),
                    fork: false,
                    stargazers_count: entry.stars,
                    html_url: format!("{}/{}", PROFILE_URL, entry.name),
                    homepage: entry.homepage.map(str::to_string),
                    site_url: entry.site_url.map(str::to_string),
                },
                entry.category,
            )
        })
        .collect()
}
