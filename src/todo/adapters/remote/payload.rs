//! Decoding of the remote seed response body.

use crate::todo::{
    domain::{RemoteTodo, SeedPayload},
    ports::{FetchError, FetchResult},
};

/// Decodes a `{ "todos": [...], "total": n }` body into task descriptors.
///
/// The whole body must match; there is no partial result.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] when the body is not valid JSON or does
/// not match the expected shape.
pub fn decode_seed_payload(body: &[u8]) -> FetchResult<Vec<RemoteTodo>> {
    let payload: SeedPayload = serde_json::from_slice(body).map_err(FetchError::decode)?;
    Ok(payload.todos)
}
