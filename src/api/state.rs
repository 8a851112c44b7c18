//! Application state shared across handlers.

use std::sync::Arc;

use crate::i18n::GreetingCatalog;
use crate::user::UserStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory user store.
    pub users: Arc<UserStore>,
    /// Greeting catalog for the i18n endpoint.
    pub greetings: Arc<GreetingCatalog>,
    /// Origins allowed by CORS. Empty means a permissive layer.
    pub allowed_origins: Vec<String>,
}

impl AppState {
    /// Create new application state.
    pub fn new(users: UserStore, greetings: GreetingCatalog) -> Self {
        Self {
            users: Arc::new(users),
            greetings: Arc::new(greetings),
            allowed_origins: Vec::new(),
        }
    }

    /// Set the CORS origin allowlist.
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }
}
