//! Remote seed port: one-shot retrieval of the initial task list.

use crate::todo::domain::RemoteTodo;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for seed fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Source of the initial task list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedFetcher: Send + Sync {
    /// Fetches and decodes the remote task list.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidEndpoint`] when the endpoint cannot be
    /// parsed, [`FetchError::Transport`] when the request fails or returns
    /// no usable body, and [`FetchError::Decode`] when the body does not
    /// match the expected shape.
    async fn fetch_remote_tasks(&self) -> FetchResult<Vec<RemoteTodo>>;
}

/// Failure kinds for the remote seed fetch.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The endpoint URL could not be constructed.
    #[error("invalid seed endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The request failed or returned no usable data.
    #[error("seed transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body did not match the expected schema.
    #[error("seed payload could not be decoded: {0}")]
    Decode(Arc<serde_json::Error>),
}

impl FetchError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding error.
    #[must_use]
    pub fn decode(err: serde_json::Error) -> Self {
        Self::Decode(Arc::new(err))
    }
}
