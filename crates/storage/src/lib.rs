//! Storage traits and backends for the cycle state record.
//!
//! The service persists exactly one record, a [`CycleState`], as the whole
//! content of one storage location. This crate defines the load/store
//! contract and two backends:
//!
//! - [`JsonFileStore`]: a pretty-printed JSON file, rewritten in full on save
//! - [`MemoryStore`]: an in-process copy of the same bytes, for tests and
//!   ephemeral runs
//!
//! # Load classification
//!
//! Loading never fails. Instead it classifies what it found as a
//! [`LoadResult`]: a usable record, no record at all, or a record that is
//! unreadable or violates the permutation invariants. The cycle manager
//! decides what to do with each case.
//!
//! All operations are synchronous blocking I/O. Callers in async contexts
//! should use `spawn_blocking` to avoid blocking the runtime.
//!
//! [`CycleState`]: chroma_types::CycleState

#![warn(missing_docs)]

mod file;
mod memory;
mod store;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{LoadResult, PersistenceError, StateStore};
