//! Application state for the web layer.

use std::sync::Arc;

use crate::store::InMemoryNetwork;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The transport network serving both resolution and edge queries
    pub network: Arc<InMemoryNetwork>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: InMemoryNetwork) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
