//! Chat CRUD handlers

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::Json;
use crate::{
    error::Result,
    models::{
        chats::{ChatResponse, NewChat, UpdateChat},
        requests::ListParams,
    },
    state::AppState,
};

/// GET /api/v1/chats
///
/// Lists chats in storage order, with optional `skip` and `limit`.
pub async fn list_chats(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse> {
    let chats: Vec<ChatResponse> = state
        .chats
        .get_all_chats(params.into())
        .await?
        .into_iter()
        .map(ChatResponse::from)
        .collect();

    Ok(Json(serde_json::json!({
        "count": chats.len(),
        "chats": chats,
    })))
}

/// GET /api/v1/chats/:id
///
/// The id is the derived participant key, e.g. `userA_userB`.
///
/// # HTTP Status Codes
/// - `200 OK`: Chat found
/// - `404 NOT_FOUND`: No such chat
pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<impl IntoResponse> {
    let chat = state.chats.get_chat_by_id(&chat_id).await?;

    Ok(Json(serde_json::json!({
        "chat": ChatResponse::from(chat),
    })))
}

/// POST /api/v1/chats
///
/// # Request Body
/// - `participants`: Non-empty list of logins
/// - `createdAt`: Optional RFC 3339 timestamp, defaults to now
///
/// # HTTP Status Codes
/// - `201 CREATED`: Chat created, `Location` points at the derived id
/// - `400 BAD_REQUEST`: No participants
/// - `409 CONFLICT`: A chat with the same participant set exists
pub async fn create_chat(
    State(state): State<AppState>,
    Json(request): Json<NewChat>,
) -> Result<impl IntoResponse> {
    let chat = state.chats.add_chat(request).await?;
    let location = format!("/api/v1/chats/{}", chat.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(serde_json::json!({
            "chat": ChatResponse::from(chat),
        })),
    ))
}

/// PUT /api/v1/chats/:id
///
/// Replaces the participant list; the chat id does not change.
///
/// # HTTP Status Codes
/// - `204 NO_CONTENT`: Participants replaced
/// - `404 NOT_FOUND`: No such chat
pub async fn update_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
    Json(request): Json<UpdateChat>,
) -> Result<StatusCode> {
    state.chats.update_chat(&chat_id, request.participants).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/chats/:id
pub async fn delete_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<StatusCode> {
    state.chats.delete_chat(&chat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
