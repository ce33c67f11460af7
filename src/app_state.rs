//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::Store;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database that holds the ledger.
    pub store: Store,
}

impl AppState {
    /// Create a new [AppState] that serves requests from `store`.
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

// Lets handlers extract just the store with `State<Store>`.
impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
