use crate::error::Result;
use crate::storage::{FileStorage, MemoryStorage};
use crate::store::Store;
use crate::view::{transition, Action, AppState, View};
use std::path::Path;
use tracing::debug;

/// What the host should show first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    /// The AI credential is absent; show setup guidance instead of crashing
    /// on the first generation call.
    ConfigurationNeeded,
    Ready(View),
}

/// Application state plus the store it is mirrored to.
///
/// Every [`dispatch`](Session::dispatch) runs the pure transition and then
/// writes each slot the transition touched, one slot at a time. There is no
/// cross-slot atomicity.
pub struct Session {
    store: Store,
    state: AppState,
}

impl Session {
    pub fn new(store: Store) -> Self {
        let state = AppState::boot(store.load_slots());
        debug!(view = %state.view, "session booted");
        Session { store, state }
    }

    /// File-backed session rooted at `root`.
    pub fn open(root: &Path) -> Self {
        Self::new(Store::new(FileStorage::new(root)))
    }

    pub fn in_memory() -> Self {
        Self::new(Store::new(MemoryStorage::new()))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn startup(&self, service_configured: bool) -> Startup {
        if service_configured {
            Startup::Ready(self.state.view)
        } else {
            Startup::ConfigurationNeeded
        }
    }

    /// Apply `action`, flushing touched slots before the new state is
    /// committed. A write failure leaves the in-memory state unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<&AppState> {
        let t = transition(&self.state, action);
        for slot in &t.touched {
            self.store.save_slot(*slot, &t.state.slots)?;
        }
        self.state = t.state;
        Ok(&self.state)
    }
}
