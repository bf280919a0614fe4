//! HTTP adapter for the remote seed source.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use super::payload::decode_seed_payload;
use crate::todo::{
    domain::RemoteTodo,
    ports::{FetchError, FetchResult, SeedFetcher},
};

/// Seed endpoint used when none is configured.
pub const DEFAULT_SEED_ENDPOINT: &str = "https://dummyjson.com/todos";

/// Fetches the seed list with a single `GET` request.
#[derive(Debug, Clone)]
pub struct HttpSeedFetcher {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpSeedFetcher {
    /// Creates a fetcher for `endpoint`.
    ///
    /// The endpoint is parsed on every fetch, so a malformed value surfaces
    /// as [`FetchError::InvalidEndpoint`] rather than at construction.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    /// Sends requests through `client` instead of a default one.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Overrides the transport's default request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn endpoint_url(&self) -> FetchResult<Url> {
        Url::parse(&self.endpoint).map_err(|err| FetchError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: err.to_string(),
        })
    }
}

impl Default for HttpSeedFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_SEED_ENDPOINT)
    }
}

#[async_trait]
impl SeedFetcher for HttpSeedFetcher {
    async fn fetch_remote_tasks(&self) -> FetchResult<Vec<RemoteTodo>> {
        let url = self.endpoint_url()?;
        tracing::debug!(%url, "requesting seed list");

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(FetchError::transport)?;
        let body = response.bytes().await.map_err(FetchError::transport)?;

        decode_seed_payload(&body)
    }
}
