//! Canned seed source for offline runs and tests.

use async_trait::async_trait;

use super::payload::decode_seed_payload;
use crate::todo::{
    domain::RemoteTodo,
    ports::{FetchError, FetchResult, SeedFetcher},
};

#[derive(Debug, Clone)]
enum CannedResponse {
    Body(Vec<u8>),
    Failure(FetchError),
}

/// Seed fetcher that answers every request with the same canned response.
///
/// Bodies are decoded on each fetch, exactly as a network body would be.
#[derive(Debug, Clone)]
pub struct StaticSeedFetcher {
    response: CannedResponse,
}

impl StaticSeedFetcher {
    /// Serves `body` as the response payload.
    #[must_use]
    pub fn from_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: CannedResponse::Body(body.into()),
        }
    }

    /// Serves an empty task list.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_body(r#"{"todos":[],"total":0}"#)
    }

    /// Fails every fetch with `error`.
    #[must_use]
    pub const fn failing(error: FetchError) -> Self {
        Self {
            response: CannedResponse::Failure(error),
        }
    }
}

#[async_trait]
impl SeedFetcher for StaticSeedFetcher {
    async fn fetch_remote_tasks(&self) -> FetchResult<Vec<RemoteTodo>> {
        match &self.response {
            CannedResponse::Body(body) => decode_seed_payload(body),
            CannedResponse::Failure(error) => Err(error.clone()),
        }
    }
}
