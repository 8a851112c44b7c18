//! API request handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{AppendHeaders, IntoResponse},
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::user::{CreateUserRequest, User};

use super::error::{ApiError, ApiResult};
use super::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// A hypermedia link attached to a response payload. Pure data, no
/// framework-level link-building.
#[derive(Debug, Serialize)]
pub struct Link {
    pub rel: &'static str,
    pub href: String,
}

/// A user payload augmented with related links.
#[derive(Debug, Serialize)]
pub struct LinkedUser {
    #[serde(flatten)]
    pub user: User,
    pub links: Vec<Link>,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List all users.
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let users = state.users.list();
    info!(count = users.len(), "Listed users");
    Json(users)
}

/// Get a specific user.
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    state
        .users
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("id {id} is not found")))
}

/// Create a new user.
///
/// Responds 201 with an empty body and a `Location` header pointing at the
/// new user's detail endpoint. Validation happens here, before the store is
/// touched, so an invalid request never partially inserts.
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn save_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let violations = request.violations();
    if !violations.is_empty() {
        return Err(ApiError::validation(violations));
    }

    let user = state.users.save(request);
    info!(user_id = %user.id, "Created new user");

    let location = format!("/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        AppendHeaders([(header::LOCATION, location)]),
    ))
}

/// Delete a user by id.
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<&'static str> {
    if state.users.delete_by_id(&id) {
        info!(user_id = %id, "Deleted user");
        Ok("successfully removed")
    } else {
        Err(ApiError::not_found(format!(
            "{id} was either removed or not found"
        )))
    }
}

/// Get a specific user with hypermedia links.
///
/// Same lookup as [`get_user`]; the payload additionally carries an
/// `all-users` link to the collection and a `user-detail` link back to the
/// plain detail endpoint.
#[instrument(skip(state))]
pub async fn get_user_with_links(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<LinkedUser>> {
    let user = state
        .users
        .get(&id)
        .ok_or_else(|| ApiError::not_found(format!("id {id} is not found")))?;

    let links = vec![
        Link {
            rel: "all-users",
            href: "/users/".to_string(),
        },
        Link {
            rel: "user-detail",
            href: format!("/users/{}", user.id),
        },
    ];

    Ok(Json(LinkedUser { user, links }))
}

/// Localized greeting, resolved from the caller's `Accept-Language` header.
#[instrument(skip(state, headers))]
pub async fn greeting(State(state): State<AppState>, headers: HeaderMap) -> String {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    state.greetings.greet(accept_language).to_string()
}
