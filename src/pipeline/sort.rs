// src/pipeline/sort.rs

use crate::domain::Job;

/// The four orderings offered by the sort dropdown. All descending except
/// experience, which surfaces entry-level roles first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Match,
    Salary,
    Date,
    Experience,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Match,
        SortKey::Salary,
        SortKey::Date,
        SortKey::Experience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Match => "Match Score",
            SortKey::Salary => "Salary",
            SortKey::Date => "Date Posted",
            SortKey::Experience => "Experience",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Match
    }
}

/// Stable sort, so jobs with equal keys keep their source order.
pub fn sort_jobs(jobs: &mut [Job], key: SortKey) {
    match key {
        SortKey::Match => jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        SortKey::Salary => jobs.sort_by(|a, b| b.salary.max.cmp(&a.salary.max)),
        SortKey::Date => jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date)),
        SortKey::Experience => jobs.sort_by(|a, b| a.experience.cmp(&b.experience)),
    }
}
