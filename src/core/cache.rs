use async_trait::async_trait;
use thiserror::Error;

use crate::core::rates::RateSnapshot;

/// Errors raised when persisting a snapshot.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Cache storage error: {0}")]
    Storage(String),
}

/// Key-value store of rate snapshots, one record per base currency.
///
/// `get` absorbs unreadable or corrupt records into a miss; only `put`
/// surfaces failures, and callers treat those as non-fatal.
#[async_trait]
pub trait RateCache: Send + Sync {
    async fn get(&self, base: &str) -> Option<RateSnapshot>;

    async fn put(&self, snapshot: &RateSnapshot) -> Result<(), CacheError>;
}
