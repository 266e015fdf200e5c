//! Core types for the chroma color-cycle service.
//!
//! This crate provides the foundational types shared by the storage layer,
//! the cycle manager and the HTTP surface:
//!
//! - **Catalog**: the fixed, ordered set of 12 [`Color`]s
//! - **State**: [`CycleState`], the persisted permutation + cursor record
//! - **Projections**: [`CycleView`] and [`ColorSelection`], the values
//!   returned to API callers
//! - **Shuffle**: the Fisher-Yates [`shuffle`] used to build permutations
//!
//! # Design Philosophy
//!
//! This crate does no I/O and depends on no other workspace crate, making it
//! the foundation layer. Randomness is always injected by the caller.

mod color;
mod shuffle;
mod state;

pub use color::{Color, UnknownColor, CATALOG, CATALOG_SIZE};
pub use shuffle::shuffle;
pub use state::{ColorSelection, CycleState, CycleView, InvalidState};
