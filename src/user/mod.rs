//! User resource module.
//!
//! Provides the User data model, input validation, and the in-memory store.

mod models;
mod store;

pub use models::{CreateUserRequest, FieldViolation, User};
pub use store::UserStore;
