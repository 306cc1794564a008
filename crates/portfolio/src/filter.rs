//! Filtered and counted views over classified repositories.
//!
//! The active selection is passed in by the caller; nothing here holds state.

use shared::{ClassifiedRepository, Selection};

/// Records visible under `selection`, in their original order
pub fn filter_by_category(
    all: &[ClassifiedRepository],
    selection: Selection,
) -> Vec<&ClassifiedRepository> {
    match selection {
        Selection::All => all.iter().collect(),
        Selection::Category(_) => all
            .iter()
            .filter(|repo| selection.includes(repo.category))
            .collect(),
    }
}

/// Number of records visible under `selection`
pub fn count_by_category(all: &[ClassifiedRepository], selection: Selection) -> usize {
    match selection {
        Selection::All => all.len(),
        Selection::Category(_) => all
            .iter()
            .filter(|repo| selection.includes(repo.category))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::categories;
    use shared::{CategoryKey, RawRepository};

    fn classified(name: &str, category: CategoryKey) -> ClassifiedRepository {
        ClassifiedRepository::new(
            RawRepository {
                name: name.to_string(),
                description: Some(format!("{} description", name)),
                language: None,
                fork: false,
                stargazers_count: 0,
                html_url: format!("https://github.com/AleFuzeti/{}", name),
                homepage: None,
                site_url: None,
            },
            category,
        )
    }

    fn sample() -> Vec<ClassifiedRepository> {
        vec![
            classified("a", CategoryKey::Websites),
            classified("b", CategoryKey::DataScience),
            classified("c", CategoryKey::Websites),
            classified("d", CategoryKey::Other),
            classified("e", CategoryKey::Websites),
        ]
    }

    fn all_selections() -> Vec<Selection> {
        std::iter::once(Selection::All)
            .chain(categories::all().iter().map(|c| Selection::Category(c.key)))
            .collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let all = sample();
        let filtered = filter_by_category(&all, Selection::All);
        assert_eq!(filtered.len(), all.len());
        assert!(filtered.iter().zip(all.iter()).all(|(f, a)| *f == a));
    }

    #[test]
    fn test_category_filter_preserves_relative_order() {
        let all = sample();
        let names: Vec<_> = filter_by_category(&all, CategoryKey::Websites.into())
            .iter()
            .map(|r| r.name())
            .collect();
        assert_eq!(names, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_count_matches_filter_length() {
        let all = sample();
        for selection in all_selections() {
            assert_eq!(
                count_by_category(&all, selection),
                filter_by_category(&all, selection).len(),
                "{}",
                selection
            );
        }
        assert_eq!(count_by_category(&all, Selection::All), 5);
        assert_eq!(count_by_category(&all, CategoryKey::Other.into()), 1);
    }

    #[test]
    fn test_empty_working_set() {
        for selection in all_selections() {
            assert!(filter_by_category(&[], selection).is_empty());
            assert_eq!(count_by_category(&[], selection), 0);
        }
    }

    #[test]
    fn test_category_without_members() {
        let all = vec![classified("a", CategoryKey::Websites)];
        assert!(filter_by_category(&all, CategoryKey::DataScience.into()).is_empty());
    }
}
