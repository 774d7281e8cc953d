// errors.rs
use std::fmt;

/// Errors originating from the persistence layer (the sqlite-backed
/// key-value store). Everything else in this crate is pure and infallible.
#[derive(Debug)]
pub enum StoreError {
    Db(String),
    Internal,
}

// Type alias commonly used by the store modules.
pub type StoreResult<T> = Result<T, StoreError>;

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Db(msg) => write!(f, "Storage Error: {msg}"),
            StoreError::Internal => write!(f, "Internal Error"),
        }
    }
}

impl std::error::Error for StoreError {}
