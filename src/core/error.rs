use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body for every user-visible failure. Errors render as plain text so they
/// can never be mistaken for a success payload.
pub const ERROR_BODY: &str = "error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(message: String) -> Self {
        Self::Configuration(message)
    }

    pub fn bad_request(message: String) -> Self {
        Self::BadRequest(message)
    }

    pub fn not_found(message: String) -> Self {
        Self::NotFound(message)
    }

    pub fn storage(message: String) -> Self {
        Self::Storage(message)
    }

    pub fn internal(message: String) -> Self {
        Self::Internal(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            // An absent category result is a documented 400, not a 404.
            Self::BadRequest(_) | Self::NotFound(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::Storage(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, ERROR_BODY).into_response()
    }
}
