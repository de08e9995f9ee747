use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::DomainError;

use crate::clients::ClientError;

/// Central error type for the orchestration service
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            AppError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, "INVALID_INPUT"),
            AppError::InvalidDuration(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg, "INVALID_DURATION")
            }
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg, "UPSTREAM_ERROR"),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                "INTERNAL_ERROR",
            ),
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidDuration { .. } => AppError::InvalidDuration(err.to_string()),
            DomainError::VenueUnavailable { .. }
            | DomainError::CompletedMatchImmutable
            | DomainError::MatchInProgress => AppError::InvalidInput(err.to_string()),
        }
    }
}

/// Default mapping from collaborator failures; call sites that need a
/// different kind (a missing team is the caller's bad input, not a 404)
/// match on the variant instead of using this.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(msg) => AppError::NotFound(msg),
            ClientError::InvalidInput(msg) => AppError::InvalidInput(msg),
            ClientError::Upstream(msg) => AppError::Upstream(msg),
        }
    }
}
