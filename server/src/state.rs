//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional auth service (absent when the identity provider is
//! not configured) and the read-only places catalog. Nothing here is
//! mutated after start-up; sessions live in the browser.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use crate::services::auth::AuthService;
use crate::services::places::PlaceCatalog;

#[derive(Clone)]
pub struct AppState {
    pub auth: Option<Arc<AuthService>>,
    pub places: Arc<PlaceCatalog>,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Option<AuthService>, places: PlaceCatalog) -> Self {
        Self { auth: auth.map(Arc::new), places: Arc::new(places) }
    }

    #[must_use]
    pub fn auth_enabled(&self) -> bool {
        self.auth.is_some()
    }
}
