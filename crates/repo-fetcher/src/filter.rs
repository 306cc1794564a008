//! Noise filter applied to the raw listing before classification.
//!
//! Forks, repositories with an absent or empty description, and the account's profile
//! repository are never shown.

use shared::RawRepository;

/// Reason a record is dropped from the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Fork,
    Undocumented,
    Profile,
}

/// Per-reason tally of one filtering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub kept: usize,
    pub forks: usize,
    pub undocumented: usize,
    pub profile: usize,
}

impl FilterReport {
    pub fn dropped(&self) -> usize {
        self.forks + self.undocumented + self.profile
    }
}

/// Why `repo` is excluded, if it is
pub fn rejection(repo: &RawRepository, excluded: &str) -> Option<Rejection> {
    if repo.fork {
        Some(Rejection::Fork)
    } else if repo.description.as_deref().map_or(true, str::is_empty) {
        Some(Rejection::Undocumented)
    } else if repo.name == excluded {
        Some(Rejection::Profile)
    } else {
        None
    }
}

/// Keep showcase-worthy records, preserving their order
pub fn retain_showcase(
    records: Vec<RawRepository>,
    excluded: &str,
) -> (Vec<RawRepository>, FilterReport) {
    let mut report = FilterReport::default();

    let kept: Vec<RawRepository> = records
        .into_iter()
        .filter(|repo| match rejection(repo, excluded) {
            None => true,
            Some(Rejection::Fork) => {
                report.forks += 1;
                false
            }
            Some(Rejection::Undocumented) => {
                report.undocumented += 1;
                false
            }
            Some(Rejection::Profile) => {
                report.profile += 1;
                false
            }
        })
        .collect();

    report.kept = kept.len();
    (kept, report)
}
