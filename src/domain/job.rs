// src/domain/job.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One synthetic listing record. Generated once per session and treated as
/// immutable afterwards; filtering and sorting only select and reorder
/// views over the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: SalaryRange,
    pub skills: Vec<String>,
    /// Fit score for the viewing candidate, 60-98 as generated.
    pub match_score: u8,
    pub job_type: JobType,
    pub posted_date: DateTime<Utc>,
    /// Years of experience required, 0-9 as generated.
    pub experience: u8,
    pub description: String,
    pub logo: String,
}

/// Closed salary band in whole dollars. Invariant: min <= max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

impl SalaryRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Compact display form, e.g. "$60k - $120k".
    pub fn display(&self) -> String {
        format!("${}k - ${}k", self.min / 1000, self.max / 1000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Remote,
    Hybrid,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Remote,
        JobType::Hybrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Remote => "Remote",
            JobType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Job {
    /// Whole days since the posting went up, floored at zero.
    pub fn days_posted(&self, now: DateTime<Utc>) -> i64 {
        (now - self.posted_date).num_days().max(0)
    }

    /// Terminal acknowledgment shown when the user applies. There is no
    /// backend call behind this.
    pub fn application_ack(&self) -> String {
        format!(
            "Application submitted for {} at {}!",
            self.title, self.company
        )
    }
}
