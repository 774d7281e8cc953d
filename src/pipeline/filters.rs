// src/pipeline/filters.rs

use chrono::{DateTime, Duration, Months, Utc};

use crate::domain::{Job, JobType};

pub const EXPERIENCE_DEFAULT: (u8, u8) = (0, 10);
pub const SALARY_DEFAULT: (i64, i64) = (0, 250_000);

/// The current set of user-chosen narrowing constraints. Edited by
/// whole-state replacement; `Default` is also the "clear all" state.
///
/// Empty location/skill/job-type sets mean "no constraint". The experience
/// and salary ranges always apply. An inverted range (min > max) matches no
/// jobs.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub locations: Vec<String>,
    pub experience: (u8, u8),
    pub salary: (i64, i64),
    pub skills: Vec<String>,
    pub job_types: Vec<JobType>,
    pub posted_within: PostedWithin,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            experience: EXPERIENCE_DEFAULT,
            salary: SALARY_DEFAULT,
            skills: Vec::new(),
            job_types: Vec::new(),
            posted_within: PostedWithin::Any,
        }
    }
}

impl FilterState {
    /// Preset: remote positions only.
    pub fn remote_jobs() -> Self {
        Self {
            job_types: vec![JobType::Remote],
            ..Self::default()
        }
    }

    /// Preset: salary band 150k-250k.
    pub fn high_salary() -> Self {
        Self {
            salary: (150_000, 250_000),
            ..Self::default()
        }
    }

    /// Number of active constraints, for the filter badge. Each non-empty
    /// set counts once, as does each range narrowed from its default.
    pub fn active_count(&self) -> usize {
        let mut n = self.locations.len() + self.skills.len() + self.job_types.len();
        if self.experience != EXPERIENCE_DEFAULT {
            n += 1;
        }
        if self.salary != SALARY_DEFAULT {
            n += 1;
        }
        if self.posted_within != PostedWithin::Any {
            n += 1;
        }
        n
    }

    pub fn has_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn matches_location(&self, job: &Job) -> bool {
        self.locations.is_empty() || self.locations.contains(&job.location)
    }

    pub fn matches_experience(&self, job: &Job) -> bool {
        job.experience >= self.experience.0 && job.experience <= self.experience.1
    }

    /// Containment semantics: the job's whole band must lie inside the
    /// filter's bounds, not merely overlap them.
    pub fn matches_salary(&self, job: &Job) -> bool {
        job.salary.min >= self.salary.0 && job.salary.max <= self.salary.1
    }

    /// Any shared skill passes.
    pub fn matches_skills(&self, job: &Job) -> bool {
        self.skills.is_empty() || self.skills.iter().any(|s| job.skills.contains(s))
    }

    pub fn matches_job_type(&self, job: &Job) -> bool {
        self.job_types.is_empty() || self.job_types.contains(&job.job_type)
    }
}

/// Substring match against title, company, or description. The caller is
/// expected to pass an already lower-cased, non-empty query.
pub fn matches_query(job: &Job, query_lower: &str) -> bool {
    job.title.to_lowercase().contains(query_lower)
        || job.company.to_lowercase().contains(query_lower)
        || job.description.to_lowercase().contains(query_lower)
}

/// Posted-date recency window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostedWithin {
    Any,
    Day,
    Week,
    Month,
}

impl PostedWithin {
    pub const ALL: [PostedWithin; 4] = [
        PostedWithin::Any,
        PostedWithin::Day,
        PostedWithin::Week,
        PostedWithin::Month,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PostedWithin::Any => "Any time",
            PostedWithin::Day => "Past 24 hours",
            PostedWithin::Week => "Past week",
            PostedWithin::Month => "Past month",
        }
    }

    /// Oldest acceptable posting instant, or None for no constraint.
    /// Month means one calendar month back; at month-arithmetic edge dates
    /// (e.g. March 31) chrono clamps to the last valid day.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            PostedWithin::Any => None,
            PostedWithin::Day => Some(now - Duration::days(1)),
            PostedWithin::Week => Some(now - Duration::days(7)),
            PostedWithin::Month => Some(
                now.checked_sub_months(Months::new(1))
                    .unwrap_or(now - Duration::days(30)),
            ),
        }
    }
}
