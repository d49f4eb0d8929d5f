pub mod chats;
pub mod health;
pub mod messages;
pub mod users;

pub use chats::*;
pub use health::*;
pub use messages::*;
pub use users::*;

use axum::{
    extract::FromRequest,
    response::{IntoResponse, Response},
};

use crate::error::Error;

/// JSON body extractor whose rejections become `400 VALIDATION_ERROR`
/// responses instead of axum's plain-text 400/415/422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
