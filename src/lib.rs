//! userd - a minimal in-memory User REST service.
//!
//! Exposes list/get/create/delete operations on a single User resource,
//! plus a hypermedia-augmented fetch and a localized greeting endpoint.

pub mod api;
pub mod i18n;
pub mod settings;
pub mod user;
