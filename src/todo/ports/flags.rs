//! Key/value port for persisted boolean flags.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for flag store operations.
pub type FlagStoreResult<T> = Result<T, FlagStoreError>;

/// Persisted boolean flags keyed by name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Reads a flag. Unset flags read as `false`.
    async fn get(&self, key: &str) -> FlagStoreResult<bool>;

    /// Writes a flag durably.
    ///
    /// # Errors
    ///
    /// Returns [`FlagStoreError::Persistence`] when the value cannot be
    /// written.
    async fn set(&self, key: &str, value: bool) -> FlagStoreResult<()>;
}

/// Errors returned by flag store implementations.
#[derive(Debug, Clone, Error)]
pub enum FlagStoreError {
    /// Reading or writing durable storage failed.
    #[error("flag persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl FlagStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
