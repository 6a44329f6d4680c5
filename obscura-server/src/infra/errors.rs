use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use obscura_core::InquiryError;

pub type AppResult<T> = Result<T, AppError>;

/// An HTTP-mapped failure. Serializes as the flat JSON error envelope the
/// site's fetch calls expect: `{ "error": "...", "errors": [...]? }`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    /// Optional detail list (e.g. catalog validation findings).
    pub errors: Option<Vec<String>>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.message });
        if let Some(errors) = self.errors {
            body["errors"] = json!(errors);
        }

        (self.status, Json(body)).into_response()
    }
}

impl From<InquiryError> for AppError {
    fn from(err: InquiryError) -> Self {
        match err {
            InquiryError::MissingFields { .. } => {
                Self::bad_request("Missing required fields")
            }
            InquiryError::Misconfigured => Self::internal(
                "Email configuration is missing. Please check your environment variables.",
            ),
            InquiryError::Delivery(err) => Self::internal(err.to_string()),
        }
    }
}
