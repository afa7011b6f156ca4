//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("invalid submission: {0}")]
  Invalid(#[from] cmhwatch_core::Error),

  /// The request body was missing, not JSON, or the wrong shape.
  #[error("malformed request body: {0}")]
  Body(#[from] JsonRejection),

  #[error("submission store error: {0}")]
  Submission(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Invalid(e) => (StatusCode::BAD_REQUEST, e.to_string()),
      ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
      // Storage details stay in the server log.
      ApiError::Submission(_) => {
        (StatusCode::INTERNAL_SERVER_ERROR, "Submission failed".to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
