//! In-memory backend.

use crate::store::{LoadResult, PersistenceError, StateStore};
use chroma_types::CycleState;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keeps the encoded record in process memory.
///
/// The record goes through the same JSON encoding as [`JsonFileStore`], so a
/// test can seed arbitrary bytes with [`MemoryStore::with_contents`] to
/// exercise the corrupt-record path, and flip
/// [`MemoryStore::set_fail_writes`] to exercise write failures.
///
/// [`JsonFileStore`]: crate::JsonFileStore
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: Mutex<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// An empty store. The first load reports [`LoadResult::Absent`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose record is the given raw bytes.
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(raw.into())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent save and clear fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The raw record, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable(
                "memory store is read-only".to_string(),
            ));
        }
        Ok(())
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> LoadResult {
        match self.contents.lock().as_deref() {
            Some(raw) => LoadResult::from_json(raw),
            None => LoadResult::Absent,
        }
    }

    fn save(&self, state: &CycleState) -> Result<(), PersistenceError> {
        self.check_writable()?;
        let encoded = serde_json::to_string_pretty(state)?;
        *self.contents.lock() = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        self.check_writable()?;
        *self.contents.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_types::CATALOG;

    fn complete_state() -> CycleState {
        CycleState {
            shuffled_colors: CATALOG.to_vec(),
            color_index: 12,
        }
    }

    #[test]
    fn test_new_store_is_absent() {
        assert_eq!(MemoryStore::new().load(), LoadResult::Absent);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        store.save(&complete_state()).unwrap();
        assert_eq!(store.load(), LoadResult::Loaded(complete_state()));
        assert!(store.contents().unwrap().contains("\"colorIndex\": 12"));
    }

    #[test]
    fn test_seeded_garbage_is_corrupt() {
        let store = MemoryStore::with_contents("[1, 2, 3]");
        assert!(matches!(store.load(), LoadResult::Corrupt { .. }));
    }

    #[test]
    fn test_fail_writes() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);

        let err = store.save(&complete_state()).unwrap_err();
        assert!(matches!(err, PersistenceError::Unavailable(_)));
        assert!(store.clear().is_err());
        assert_eq!(store.load(), LoadResult::Absent);

        store.set_fail_writes(false);
        store.save(&complete_state()).unwrap();
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.save(&complete_state()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.contents(), None);
    }
}
