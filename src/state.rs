//! Shared application state handed to route registration.

use std::sync::Arc;

use crate::dao::game_store::GameStore;

/// Cheaply clonable handle on the application state.
pub type SharedState = Arc<AppState>;

/// Central application state giving handlers access to the entity store.
///
/// Constructed once in `main` and threaded through the router; the store
/// connection lives for the whole process.
pub struct AppState {
    store: Arc<dyn GameStore>,
}

impl AppState {
    /// Wrap a store into a [`SharedState`] ready to hand to the router.
    pub fn new(store: Arc<dyn GameStore>) -> SharedState {
        Arc::new(Self { store })
    }

    /// Handle to the entity store backing all game operations.
    pub fn store(&self) -> Arc<dyn GameStore> {
        Arc::clone(&self.store)
    }
}
