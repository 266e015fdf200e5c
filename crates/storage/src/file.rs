//! JSON file backend.

use crate::store::{LoadResult, PersistenceError, StateStore};
use chroma_metrics as metrics;
use chroma_types::CycleState;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{instrument, Level};

/// Stores the record as pretty-printed JSON in a single file.
///
/// Every save rewrites the whole file. There is no locking across
/// processes; one writer at a time is assumed.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`. Nothing is touched until
    /// the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    #[instrument(level = Level::DEBUG, skip_all, fields(
        path = %self.path.display(),
        latency_us = tracing::field::Empty,
    ))]
    fn load(&self) -> LoadResult {
        let start = Instant::now();
        let result = match fs::read_to_string(&self.path) {
            Ok(contents) => LoadResult::from_json(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => LoadResult::Absent,
            Err(e) => LoadResult::Corrupt {
                reason: format!("unreadable record: {e}"),
            },
        };
        let elapsed = start.elapsed();
        metrics::record_storage_read(elapsed.as_secs_f64());
        tracing::Span::current().record("latency_us", elapsed.as_micros() as u64);

        result
    }

    #[instrument(level = Level::DEBUG, skip_all, fields(
        path = %self.path.display(),
        color_index = state.color_index,
    ))]
    fn save(&self, state: &CycleState) -> Result<(), PersistenceError> {
        let start = Instant::now();
        let encoded = serde_json::to_string_pretty(state)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| PersistenceError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        fs::write(&self.path, encoded).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        metrics::record_storage_write(start.elapsed().as_secs_f64());

        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistenceError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
