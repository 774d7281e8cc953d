// src/store/saved_jobs.rs

use crate::errors::StoreResult;
use crate::store::KvStore;

/// Storage key for the saved-job id array.
pub const SAVED_JOBS_KEY: &str = "savedJobs";

/// The set of job ids the user has bookmarked, kept in insertion order and
/// mirrored to the kv store as a JSON array after every mutation.
#[derive(Debug, Default)]
pub struct SavedJobs {
    ids: Vec<String>,
}

impl SavedJobs {
    /// Read the persisted set. Absent or unparsable content is treated as
    /// empty, not as an error.
    pub fn load(store: &KvStore) -> StoreResult<Self> {
        let ids = match store.get(SAVED_JOBS_KEY)? {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { ids })
    }

    /// Flip membership of `job_id`, persist, and return the new membership.
    pub fn toggle(&mut self, store: &KvStore, job_id: &str) -> StoreResult<bool> {
        let saved = match self.ids.iter().position(|id| id == job_id) {
            Some(pos) => {
                self.ids.remove(pos);
                false
            }
            None => {
                self.ids.push(job_id.to_string());
                true
            }
        };
        self.persist(store)?;
        Ok(saved)
    }

    pub fn is_saved(&self, job_id: &str) -> bool {
        self.ids.iter().any(|id| id == job_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    fn persist(&self, store: &KvStore) -> StoreResult<()> {
        // Vec<String> to a JSON array can't fail to encode.
        let raw = serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".into());
        store.set(SAVED_JOBS_KEY, &raw)
    }
}
