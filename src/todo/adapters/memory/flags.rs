//! In-memory flag store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::ports::{FlagStore, FlagStoreError, FlagStoreResult};

/// Thread-safe in-memory flag store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlagStore {
    flags: Arc<RwLock<HashMap<String, bool>>>,
}

impl InMemoryFlagStore {
    /// Creates a store with every flag unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with `key` already set to `value`.
    #[must_use]
    pub fn with_flag(key: impl Into<String>, value: bool) -> Self {
        let flags = HashMap::from([(key.into(), value)]);
        Self {
            flags: Arc::new(RwLock::new(flags)),
        }
    }
}

fn lock_error(err: impl ToString) -> FlagStoreError {
    FlagStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl FlagStore for InMemoryFlagStore {
    async fn get(&self, key: &str) -> FlagStoreResult<bool> {
        let flags = self.flags.read().map_err(lock_error)?;
        Ok(flags.get(key).copied().unwrap_or(false))
    }

    async fn set(&self, key: &str, value: bool) -> FlagStoreResult<()> {
        let mut flags = self.flags.write().map_err(lock_error)?;
        flags.insert(key.to_owned(), value);
        Ok(())
    }
}
