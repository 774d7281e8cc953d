use crate::domain::{Job, JobType, SalaryRange};
use crate::store::KvStore;
use chrono::{Duration, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh kv store backed by a unique sqlite file under the temp dir.
pub fn make_store(tag: &str) -> KvStore {
    let path = std::env::temp_dir().join(format!(
        "{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let store = KvStore::new(path.to_string_lossy().into_owned());
    store.init().expect("store init failed");
    store
}

/// Baseline job fixture; tests override fields with struct update syntax.
pub fn job(id: &str) -> Job {
    Job {
        id: id.to_string(),
        title: "Backend Engineer".to_string(),
        company: "TechCorp".to_string(),
        location: "Remote".to_string(),
        salary: SalaryRange::new(80_000, 120_000),
        skills: vec!["Rust".to_string()],
        match_score: 80,
        job_type: JobType::FullTime,
        posted_date: Utc::now() - Duration::days(2),
        experience: 3,
        description: "Build and run our core services.".to_string(),
        logo: String::new(),
    }
}

/// `count` jobs with ids "job-1".. and staggered match scores, enough to
/// exercise pagination.
pub fn job_batch(count: usize) -> Vec<Job> {
    (0..count)
        .map(|i| Job {
            match_score: (60 + (i * 7) % 39) as u8,
            ..job(&format!("job-{}", i + 1))
        })
        .collect()
}
