//! Flag store persisted as a JSON object.

use async_trait::async_trait;
use camino::Utf8Path;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::json_file::{JsonFile, run_blocking_with};
use crate::todo::ports::{FlagStore, FlagStoreError, FlagStoreResult};

/// Boolean flags stored as one `{"key": bool}` JSON file.
///
/// Writes run on the blocking thread pool.
#[derive(Debug)]
pub struct JsonFileFlagStore {
    file: Arc<JsonFile>,
    flags: Arc<Mutex<BTreeMap<String, bool>>>,
}

impl JsonFileFlagStore {
    /// Opens the flag file at `dir_path/file_name`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagStoreError::Persistence`] when the directory cannot be
    /// opened or the existing file cannot be read or parsed.
    pub fn open(dir_path: &Utf8Path, file_name: &str) -> FlagStoreResult<Self> {
        let file = JsonFile::open(dir_path, file_name).map_err(FlagStoreError::persistence)?;
        let flags = file
            .read_or_default()
            .map_err(FlagStoreError::persistence)?;
        Ok(Self {
            file: Arc::new(file),
            flags: Arc::new(Mutex::new(flags)),
        })
    }
}

fn lock_error(err: impl ToString) -> FlagStoreError {
    FlagStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl FlagStore for JsonFileFlagStore {
    async fn get(&self, key: &str) -> FlagStoreResult<bool> {
        let flags = self.flags.lock().map_err(lock_error)?;
        Ok(flags.get(key).copied().unwrap_or(false))
    }

    async fn set(&self, key: &str, value: bool) -> FlagStoreResult<()> {
        let file = Arc::clone(&self.file);
        let cache = Arc::clone(&self.flags);
        let key = key.to_owned();
        run_blocking_with(
            move || {
                let mut flags = cache.lock().map_err(lock_error)?;
                let mut updated = flags.clone();
                updated.insert(key, value);
                file.write(&updated).map_err(FlagStoreError::persistence)?;
                *flags = updated;
                Ok(())
            },
            FlagStoreError::persistence,
        )
        .await
    }
}
