//! Test utilities and common setup.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use chrono::NaiveDate;

use userd::api::{self, AppState};
use userd::i18n::GreetingCatalog;
use userd::user::{CreateUserRequest, UserStore};

/// Create a test application with an empty store.
pub fn test_app() -> Router {
    let state = AppState::new(UserStore::new(), test_catalog());
    api::create_router(state)
}

/// Create a test application with two seeded users ("Alice" id 1, "Bob" id 2)
/// and return a handle to the store for state assertions.
pub fn test_app_seeded() -> (Router, Arc<UserStore>) {
    let store = UserStore::new();
    store.save(CreateUserRequest {
        name: "Alice".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 1),
    });
    store.save(CreateUserRequest {
        name: "Bob".to_string(),
        birth_date: None,
    });

    let state = AppState::new(store, test_catalog());
    let store = state.users.clone();
    (api::create_router(state), store)
}

fn test_catalog() -> GreetingCatalog {
    GreetingCatalog::new("Good Morning", &HashMap::new())
}
