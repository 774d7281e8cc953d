pub mod connection;
pub mod saved_jobs;
pub mod theme;

pub use connection::KvStore;
pub use saved_jobs::SavedJobs;
pub use theme::Theme;
