/*
 * Responsibility
 * - Request-local ApiError definition
 * - IntoResponse: status + plain-text body carrying the underlying message
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::session::SessionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    FormParse(String),
    #[error("missing form field: {0}")]
    MissingField(&'static str),
    #[error("{0}")]
    Insert(SessionError),
    #[error("{0}")]
    Query(SessionError),
    #[error("{0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Session(SessionError),
    #[error("database session missing from request")]
    SessionMissing,
    #[error("Not supported")]
    MethodNotSupported,
}

impl AppError {
    pub fn form_parse(message: impl Into<String>) -> Self {
        Self::FormParse(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::Insert(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
            AppError::FormParse(_)
            | AppError::Query(_)
            | AppError::Encode(_)
            | AppError::Session(_)
            | AppError::SessionMissing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, %status, "request rejected");
        }

        (status, self.to_string()).into_response()
    }
}
