//! Cycle state manager.
//!
//! Owns the shuffled-permutation cycle over the color catalog: loading the
//! persisted [`CycleState`], projecting it for display, advancing the cursor,
//! and writing the result back through a [`StateStore`].
//!
//! ```text
//!   GET  /api/state       ──► load ──► view
//!   POST /api/next-color  ──► load ──► advance ──► save
//! ```
//!
//! Loads never fail: an absent or corrupt record is replaced by a fresh
//! shuffle (not persisted until the next advance). Saves can fail with a
//! [`PersistenceError`], which the caller reports as a server error.
//!
//! [`CycleState`]: chroma_types::CycleState
//! [`StateStore`]: chroma_storage::StateStore
//! [`PersistenceError`]: chroma_storage::PersistenceError

mod manager;

pub use manager::CycleManager;
