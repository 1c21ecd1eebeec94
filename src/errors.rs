use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::FieldError;
use crate::services::scheduling::SlotDenied;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Slot(SlotDenied),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "request failed");
                let body = serde_json::json!({ "error": "internal error" });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
            AppError::BadRequest(msg) => {
                let body = serde_json::json!({ "error": msg });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            AppError::Unauthorized => {
                let body = serde_json::json!({ "error": "unauthorized" });
                (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
            }
            AppError::NotFound(msg) => {
                let body = serde_json::json!({ "error": msg });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            AppError::Validation(errors) => {
                let body = serde_json::json!({ "errors": errors });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            AppError::Slot(denied) => {
                let body = serde_json::json!({
                    "error": denied.to_string(),
                    "reason": denied.reason(),
                });
                (StatusCode::CONFLICT, axum::Json(body)).into_response()
            }
        }
    }
}

impl From<SlotDenied> for AppError {
    fn from(denied: SlotDenied) -> Self {
        AppError::Slot(denied)
    }
}
