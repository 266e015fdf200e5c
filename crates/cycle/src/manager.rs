//! The cycle state manager.

use chroma_metrics::{self as metrics, LoadOutcome};
use chroma_storage::{LoadResult, PersistenceError, StateStore};
use chroma_types::{ColorSelection, CycleState, CycleView};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, warn};

/// Single logical owner of the persisted cycle record.
///
/// All operations run under one mutex, so in-process callers never
/// interleave a load-advance-save sequence. Separate processes sharing the
/// same record are not coordinated.
pub struct CycleManager<S> {
    /// Guards both the shuffle source and the read-modify-write sequence.
    rng: Mutex<ChaCha8Rng>,
    store: S,
}

impl<S: StateStore> CycleManager<S> {
    /// Create a manager whose shuffles are seeded from OS entropy.
    pub fn new(store: S) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
            store,
        }
    }

    /// Create a manager with reproducible shuffles.
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            store,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted state, synthesizing a fresh cycle if it is absent
    /// or unusable. Never fails.
    pub fn load_state(&self) -> CycleState {
        let mut rng = self.rng.lock();
        self.load_locked(&mut rng)
    }

    /// Persist `state`, replacing whatever was stored.
    pub fn save_state(&self, state: &CycleState) -> Result<(), PersistenceError> {
        let _guard = self.rng.lock();
        self.save_locked(state)
    }

    /// Load the state and project it. Does not persist a synthesized state.
    pub fn current_view(&self) -> CycleView {
        self.load_state().view()
    }

    /// Hand out the next color and persist the advanced state.
    ///
    /// On a save failure nothing is kept in memory; the durable record is
    /// unchanged and a retry starts again from it.
    pub fn next_color(&self) -> Result<ColorSelection, PersistenceError> {
        let mut rng = self.rng.lock();
        let mut state = self.load_locked(&mut rng);

        let selection = state.advance(&mut *rng);
        if selection.started_new_cycle {
            info!(first = %selection.selected_color, "Starting new color cycle");
            metrics::record_cycle_started();
        }

        self.save_locked(&state)?;

        metrics::record_color_advanced();
        metrics::set_cycle_position(selection.new_index);
        debug!(
            color = %selection.selected_color,
            new_index = selection.new_index,
            total = selection.total_colors,
            complete = selection.is_cycle_complete,
            "Advanced color cycle"
        );

        Ok(selection)
    }

    /// Remove the persisted record. The next load synthesizes a fresh cycle.
    pub fn reset(&self) -> Result<(), PersistenceError> {
        let _guard = self.rng.lock();
        self.store.clear()?;
        info!("Cleared stored cycle state");
        Ok(())
    }

    fn load_locked(&self, rng: &mut ChaCha8Rng) -> CycleState {
        match self.store.load() {
            LoadResult::Loaded(state) => {
                metrics::record_state_load(LoadOutcome::Loaded);
                state
            }
            LoadResult::Absent => {
                metrics::record_state_load(LoadOutcome::Absent);
                info!("No stored cycle state, starting fresh");
                CycleState::fresh(rng)
            }
            LoadResult::Corrupt { reason } => {
                metrics::record_state_load(LoadOutcome::Corrupt);
                warn!(%reason, "Stored cycle state unusable, starting fresh");
                CycleState::fresh(rng)
            }
        }
    }

    fn save_locked(&self, state: &CycleState) -> Result<(), PersistenceError> {
        self.store.save(state).inspect_err(|e| {
            metrics::record_persist_failure();
            error!(error = %e, "Failed to persist cycle state");
        })
    }
}
