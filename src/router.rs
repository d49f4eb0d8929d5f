//! Route table for the `/api/v1` surface.

use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Routes relative to `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Users
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        // Chats
        .route("/chats", get(handlers::list_chats).post(handlers::create_chat))
        .route(
            "/chats/{id}",
            get(handlers::get_chat)
                .put(handlers::update_chat)
                .delete(handlers::delete_chat),
        )
        .route("/chats/{id}/messages", get(handlers::list_chat_messages))
        // Messages
        .route("/messages", axum::routing::post(handlers::create_message))
        .route(
            "/messages/{id}",
            get(handlers::get_message)
                .put(handlers::update_message)
                .delete(handlers::delete_message),
        )
}

/// Full application router with HTTP tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
