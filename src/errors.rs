use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RespError {
    /// Payload could not be encoded, or the body stream refused the bytes.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid status code: {0}")]
    InvalidStatus(u16),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl IntoResponse for RespError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(json!({
            "message": self.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
