//! Cache client interface used by higher-level services (vote tallies).
use async_trait::async_trait;
use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache-layer errors (transport/command/value).
///
/// Kept independent from `AppError` so callers decide how a failure surfaces.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    BackendConnection(String),
    #[error("cache command error: {0}")]
    BackendCommand(String),
    #[error("cache value error: {0}")]
    InvalidValue(String),
}

/// A minimal cache interface.
///
/// Only the sorted-set read the tally service needs is exposed here; vote
/// submission writes through a different process.
///
/// Implementations must be cheap to clone (typically `Arc<...>` inside).
#[async_trait]
pub trait CacheClient: Clone + Send + Sync + 'static {
    // Returns the cache backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Whole sorted set as `(member, score)` pairs in ascending score order.
    //
    // A missing key is an empty set, not an error.
    async fn sorted_set_range_with_scores(&self, key: &str) -> CacheResult<Vec<(String, f64)>>;
}
