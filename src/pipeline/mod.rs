// src/pipeline/mod.rs
//
// The search -> filter -> sort pipeline. Pure: callers pass the collection,
// the committed query, the filter state, the sort key, and `now` (the
// posted-date cutoff is relative), and get back a fresh ordered Vec.

pub mod filters;
pub mod sort;

pub use filters::{FilterState, PostedWithin};
pub use sort::SortKey;

use chrono::{DateTime, Utc};

use crate::domain::Job;

/// Run every stage in a fixed order: text search, location, experience,
/// salary, skills, job type, posted date, then a stable sort. Each filter
/// stage narrows; the sort reorders. The input is never mutated.
pub fn apply(
    jobs: &[Job],
    query: &str,
    filters: &FilterState,
    sort_key: SortKey,
    now: DateTime<Utc>,
) -> Vec<Job> {
    let query = query.trim().to_lowercase();
    let cutoff = filters.posted_within.cutoff(now);

    let mut result: Vec<Job> = jobs
        .iter()
        .filter(|job| query.is_empty() || filters::matches_query(job, &query))
        .filter(|job| filters.matches_location(job))
        .filter(|job| filters.matches_experience(job))
        .filter(|job| filters.matches_salary(job))
        .filter(|job| filters.matches_skills(job))
        .filter(|job| filters.matches_job_type(job))
        .filter(|job| cutoff.map_or(true, |c| job.posted_date >= c))
        .cloned()
        .collect();

    sort::sort_jobs(&mut result, sort_key);
    result
}
