//! Remote seed adapters.

mod fixture;
mod http;
mod payload;

pub use fixture::StaticSeedFetcher;
pub use http::{DEFAULT_SEED_ENDPOINT, HttpSeedFetcher};
pub use payload::decode_seed_payload;
