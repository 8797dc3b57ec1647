//! Error types for the Blog API.
//!
//! [`ApiError`] is the single error type returned by handlers. It converts
//! into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation, rendering
//! the body as `{"detail": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Detail message returned when a slug lookup misses.
pub const POST_NOT_FOUND: &str = "Post not found";

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// The error returned for a slug with no matching post.
    pub fn post_not_found() -> Self {
        Self::NotFound(String::from(POST_NOT_FOUND))
    }

    /// HTTP status code this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "detail": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
