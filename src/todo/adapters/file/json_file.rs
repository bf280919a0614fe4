//! Atomic JSON document storage inside a capability directory.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Serialize, de::DeserializeOwned};
use std::io;
use tokio::task::JoinError;

/// A single JSON document stored as one file.
///
/// Writes land in a temporary sibling that is renamed over the target, so
/// readers see either the previous or the new document.
#[derive(Debug)]
pub(super) struct JsonFile {
    dir: Dir,
    file_name: String,
}

impl JsonFile {
    /// Opens `file_name` inside `dir_path`, creating the directory if needed.
    pub(super) fn open(dir_path: &Utf8Path, file_name: &str) -> io::Result<Self> {
        Dir::create_ambient_dir_all(dir_path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(dir_path, ambient_authority())?;
        Ok(Self {
            dir,
            file_name: file_name.to_owned(),
        })
    }

    /// Reads the document, or its default when the file does not exist yet.
    pub(super) fn read_or_default<T>(&self) -> io::Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.dir.read_to_string(self.file_name.as_str()) {
            Ok(contents) => serde_json::from_str(&contents).map_err(io::Error::other),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(T::default()),
            Err(err) => Err(err),
        }
    }

    /// Replaces the document with `value`.
    pub(super) fn write<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let contents = serde_json::to_vec_pretty(value).map_err(io::Error::other)?;
        let temp_name = format!("{}.tmp", self.file_name);
        self.dir.write(temp_name.as_str(), contents)?;
        self.dir
            .rename(temp_name.as_str(), &self.dir, self.file_name.as_str())
    }
}

/// Runs blocking file work on the blocking thread pool.
///
/// Join errors are mapped into the caller's error type with `map_err`.
pub(super) async fn run_blocking_with<F, T, E, M>(work: F, map_err: M) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    M: FnOnce(JoinError) -> E,
{
    tokio::task::spawn_blocking(work).await.map_err(map_err)?
}
