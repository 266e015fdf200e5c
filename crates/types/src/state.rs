//! The persisted cycle record and its projections.

use crate::color::{Color, CATALOG, CATALOG_SIZE};
use crate::shuffle::shuffle;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shuffled permutation of the catalog plus a cursor into it.
///
/// This is exactly the record that gets persisted:
///
/// ```json
/// { "shuffledColors": ["red", "blue", ...], "colorIndex": 3 }
/// ```
///
/// `color_index` marks the next unselected color. When it reaches
/// `shuffled_colors.len()` the cycle is complete and the next advance starts
/// a brand-new shuffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleState {
    pub shuffled_colors: Vec<Color>,
    pub color_index: usize,
}

/// Why a parsed record cannot be used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("expected 12 colors, found {len}")]
    WrongLength { len: usize },

    #[error("color {0} appears more than once")]
    DuplicateColor(Color),

    #[error("color index {index} exceeds permutation length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Read-only projection served by `GET /api/state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleView {
    /// `None` once the cycle is complete.
    pub current_color: Option<Color>,
    pub color_index: usize,
    pub total_colors: usize,
    pub is_cycle_complete: bool,
}

/// Outcome of a single advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSelection {
    pub selected_color: Color,
    /// Cursor after the advance.
    pub new_index: usize,
    pub total_colors: usize,
    pub is_cycle_complete: bool,
    /// True when this advance had to start a new permutation first.
    pub started_new_cycle: bool,
}

impl CycleState {
    /// A fresh random permutation with the cursor at 0.
    pub fn fresh<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut shuffled_colors = CATALOG.to_vec();
        shuffle(&mut shuffled_colors, rng);
        Self {
            shuffled_colors,
            color_index: 0,
        }
    }

    /// Number of colors in the current permutation.
    pub fn total_colors(&self) -> usize {
        self.shuffled_colors.len()
    }

    /// Whether the cursor has reached the end of the permutation.
    pub fn is_cycle_complete(&self) -> bool {
        self.color_index >= self.shuffled_colors.len()
    }

    /// Whether the next advance must regenerate before selecting.
    pub fn needs_regeneration(&self) -> bool {
        self.shuffled_colors.is_empty() || self.is_cycle_complete()
    }

    /// Check that this is a full permutation of the catalog with an in-range
    /// cursor. `color_index == len` is valid (cycle complete).
    pub fn validate(&self) -> Result<(), InvalidState> {
        let len = self.shuffled_colors.len();
        if len != CATALOG_SIZE {
            return Err(InvalidState::WrongLength { len });
        }

        let mut seen = [false; CATALOG_SIZE];
        for color in &self.shuffled_colors {
            let slot = &mut seen[color.catalog_index()];
            if *slot {
                return Err(InvalidState::DuplicateColor(*color));
            }
            *slot = true;
        }

        if self.color_index > len {
            return Err(InvalidState::IndexOutOfRange {
                index: self.color_index,
                len,
            });
        }
        Ok(())
    }

    /// Project the state for display. Pure.
    pub fn view(&self) -> CycleView {
        CycleView {
            current_color: self.shuffled_colors.get(self.color_index).copied(),
            color_index: self.color_index,
            total_colors: self.total_colors(),
            is_cycle_complete: self.is_cycle_complete(),
        }
    }

    /// Select the color under the cursor and move the cursor forward.
    ///
    /// An empty or exhausted permutation is first replaced by a fresh shuffle,
    /// so a rollover never replays the previous order. The caller persists
    /// the mutated state.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ColorSelection {
        let started_new_cycle = self.needs_regeneration();
        if started_new_cycle {
            *self = Self::fresh(rng);
        }

        let selected_color = self.shuffled_colors[self.color_index];
        self.color_index += 1;

        ColorSelection {
            selected_color,
            new_index: self.color_index,
            total_colors: self.total_colors(),
            is_cycle_complete: self.is_cycle_complete(),
            started_new_cycle,
        }
    }
}
