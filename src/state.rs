// src/state.rs
use std::sync::Arc;

use crate::services::catalog::Catalog;
use crate::services::provider::CompletionProvider;

pub type SharedState = Arc<AppState>;

/// Read-only after startup, so requests can share it without locking.
pub struct AppState {
    pub catalog: Catalog,
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(catalog: Catalog, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { catalog, provider }
    }
}
