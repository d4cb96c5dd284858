use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sm_core::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Fields(Vec<FieldError>),
    Message(String),
}

/// JSON error body: `{"detail": ..., "status": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub detail: ErrorDetail,
    pub status: u16,
}

impl ApiError {
    fn unprocessable(field: &str, message: String) -> Self {
        Self {
            detail: ErrorDetail::Fields(vec![FieldError {
                field: field.to_string(),
                message,
            }]),
            status: StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(e) => Self::unprocessable(e.field, e.message),
            other => Self {
                detail: ErrorDetail::Message(other.to_string()),
                status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unprocessable("body", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
