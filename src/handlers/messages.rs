//! Message CRUD handlers

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::Json;
use crate::{
    error::Result,
    models::{
        messages::{MessageResponse, NewMessage, UpdateMessage},
        requests::ListParams,
    },
    state::AppState,
};

/// GET /api/v1/chats/:chat_id/messages
///
/// Lists the messages of a chat. An unknown chat id yields an empty list,
/// not a 404.
pub async fn list_chat_messages(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse> {
    let messages: Vec<MessageResponse> = state
        .messages
        .get_messages_by_chat_id(&chat_id, params.into())
        .await?
        .into_iter()
        .map(MessageResponse::from)
        .collect();

    Ok(Json(serde_json::json!({
        "count": messages.len(),
        "messages": messages,
    })))
}

/// GET /api/v1/messages/:id
///
/// # HTTP Status Codes
/// - `200 OK`: Message found
/// - `400 BAD_REQUEST`: Id is not a 24 character hex string
/// - `404 NOT_FOUND`: No such message
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<impl IntoResponse> {
    let message = state.messages.get_message_by_id(&message_id).await?;

    Ok(Json(serde_json::json!({
        "message": MessageResponse::from(message),
    })))
}

/// POST /api/v1/messages
///
/// # Request Body
/// - `chatId`, `senderLogin`, `message`: Required, non-blank
/// - `timestamp`: Optional RFC 3339 timestamp, defaults to now
///
/// # HTTP Status Codes
/// - `201 CREATED`: Message stored, `Location` points at it
/// - `400 BAD_REQUEST`: A required field is blank
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<NewMessage>,
) -> Result<impl IntoResponse> {
    let message = state.messages.add_message(request).await?;
    let location = format!("/api/v1/messages/{}", message.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(serde_json::json!({
            "message": MessageResponse::from(message),
        })),
    ))
}

/// PUT /api/v1/messages/:id
///
/// Body `{"message": "<new text>"}`. Only the text changes.
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    Json(request): Json<UpdateMessage>,
) -> Result<StatusCode> {
    state.messages.update_message(&message_id, request.text).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/messages/:id
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<StatusCode> {
    state.messages.delete_message(&message_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
