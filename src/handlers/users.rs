//! User CRUD handlers
//!
//! Handlers follow the thin-layer pattern: they extract inputs, delegate to
//! the user service, and shape the response. All rules live in the service.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::Json;
use crate::{
    error::Result,
    models::{
        requests::UserListParams,
        users::{NewUser, UpdateUser, UserResponse},
    },
    state::AppState,
};

// ============================================================================
// LIST USERS
// ============================================================================

/// GET /api/v1/users
///
/// Lists users in storage order.
///
/// # Query Parameters
/// - `firstName`: Only users with exactly this first name
/// - `skip`, `limit`: Ad-hoc paging
///
/// # Returns
/// JSON response containing:
/// - `users`: Array of users
/// - `count`: Number of users returned
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse> {
    let users: Vec<UserResponse> = state
        .users
        .get_all_users(params.into())
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(serde_json::json!({
        "count": users.len(),
        "users": users,
    })))
}

// ============================================================================
// GET SINGLE USER
// ============================================================================

/// GET /api/v1/users/:id
///
/// # HTTP Status Codes
/// - `200 OK`: User found
/// - `400 BAD_REQUEST`: Id is not a 24 character hex string
/// - `404 NOT_FOUND`: No such user
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    let user = state.users.get_user_by_id(&user_id).await?;

    Ok(Json(serde_json::json!({
        "user": UserResponse::from(user),
    })))
}

// ============================================================================
// CREATE USER
// ============================================================================

/// POST /api/v1/users
///
/// # Request Body
/// - `login`: Required, unique
/// - `password`: Required
/// - `email`, `firstName`, `lastName`: Optional
///
/// # HTTP Status Codes
/// - `201 CREATED`: User created, `Location` points at the new user
/// - `400 BAD_REQUEST`: Blank login or password
/// - `409 CONFLICT`: Login already exists
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<NewUser>,
) -> Result<impl IntoResponse> {
    let user = state.users.add_user(request).await?;
    let location = format!("/api/v1/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(serde_json::json!({
            "user": UserResponse::from(user),
        })),
    ))
}

// ============================================================================
// UPDATE USER
// ============================================================================

/// PUT /api/v1/users/:id
///
/// Replaces login, password, email, first and last name.
///
/// # HTTP Status Codes
/// - `204 NO_CONTENT`: User updated
/// - `400 BAD_REQUEST`: Malformed id
/// - `404 NOT_FOUND`: No such user
/// - `409 CONFLICT`: Login belongs to another user
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUser>,
) -> Result<StatusCode> {
    state.users.edit_user(&user_id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// DELETE USER
// ============================================================================

/// DELETE /api/v1/users/:id
///
/// # HTTP Status Codes
/// - `204 NO_CONTENT`: User removed
/// - `400 BAD_REQUEST`: Malformed id
/// - `404 NOT_FOUND`: No such user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode> {
    state.users.remove_user(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
