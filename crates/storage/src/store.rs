//! The state store contract.

use chroma_types::CycleState;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Outcome of reading the persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    /// A well-formed permutation with an in-range cursor.
    Loaded(CycleState),
    /// Nothing has been persisted yet.
    Absent,
    /// A record exists but cannot be used.
    Corrupt {
        /// Human-readable cause, for logging.
        reason: String,
    },
}

impl LoadResult {
    /// Classify raw record bytes.
    ///
    /// Content that does not decode, or decodes to a record violating the
    /// permutation invariants, is [`LoadResult::Corrupt`].
    pub fn from_json(contents: &str) -> Self {
        let state: CycleState = match serde_json::from_str(contents) {
            Ok(state) => state,
            Err(e) => {
                return LoadResult::Corrupt {
                    reason: format!("malformed record: {e}"),
                }
            }
        };

        match state.validate() {
            Ok(()) => LoadResult::Loaded(state),
            Err(e) => LoadResult::Corrupt {
                reason: format!("invalid record: {e}"),
            },
        }
    }
}

/// Errors from persisting the state record.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The state could not be encoded.
    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),

    /// The record could not be written.
    #[error("Failed to write state to {}: {source}", path.display())]
    Write {
        /// Location of the record.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The record could not be removed.
    #[error("Failed to remove state at {}: {source}", path.display())]
    Remove {
        /// Location of the record.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The backend refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistent home of the single [`CycleState`] record.
pub trait StateStore: Send + Sync {
    /// Read and classify the persisted record. Never fails.
    fn load(&self) -> LoadResult;

    /// Replace the persisted record with `state`.
    fn save(&self, state: &CycleState) -> Result<(), PersistenceError>;

    /// Remove the persisted record. Removing an absent record succeeds.
    fn clear(&self) -> Result<(), PersistenceError>;
}

impl<T: StateStore + ?Sized> StateStore for Box<T> {
    fn load(&self) -> LoadResult {
        (**self).load()
    }

    fn save(&self, state: &CycleState) -> Result<(), PersistenceError> {
        (**self).save(state)
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        (**self).clear()
    }
}

impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    fn load(&self) -> LoadResult {
        (**self).load()
    }

    fn save(&self, state: &CycleState) -> Result<(), PersistenceError> {
        (**self).save(state)
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_types::CATALOG;

    #[test]
    fn test_from_json_valid_record() {
        let state = CycleState {
            shuffled_colors: CATALOG.to_vec(),
            color_index: 12,
        };
        let raw = serde_json::to_string(&state).unwrap();
        assert_eq!(LoadResult::from_json(&raw), LoadResult::Loaded(state));
    }

    #[test]
    fn test_from_json_garbage_is_corrupt() {
        let result = LoadResult::from_json("{not json");
        assert!(matches!(result, LoadResult::Corrupt { reason } if reason.contains("malformed")));
    }

    #[test]
    fn test_from_json_unknown_color_is_corrupt() {
        let raw = r#"{"shuffledColors": ["teal"], "colorIndex": 0}"#;
        assert!(matches!(
            LoadResult::from_json(raw),
            LoadResult::Corrupt { .. }
        ));
    }

    #[test]
    fn test_from_json_empty_permutation_is_corrupt() {
        let raw = r#"{"shuffledColors": [], "colorIndex": 0}"#;
        let result = LoadResult::from_json(raw);
        assert!(matches!(result, LoadResult::Corrupt { reason } if reason.contains("invalid")));
    }

    #[test]
    fn test_from_json_missing_field_is_corrupt() {
        let raw = r#"{"colorIndex": 0}"#;
        assert!(matches!(
            LoadResult::from_json(raw),
            LoadResult::Corrupt { .. }
        ));
    }

    #[test]
    fn test_persistence_error_messages() {
        let err = PersistenceError::Write {
            path: PathBuf::from("/tmp/db.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write state to /tmp/db.json: denied");
    }
}
