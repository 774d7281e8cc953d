pub mod generator;
pub mod job;

pub use job::{Job, JobType, SalaryRange};
