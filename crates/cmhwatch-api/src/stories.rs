//! Handler for `POST /stories`: community story intake.
//!
//! The payload is validated, handed to the [`SubmissionStore`], and never
//! read back into the people model.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use cmhwatch_core::submission::{NewSubmission, SubmissionStore};
use serde_json::json;

use crate::{ApiState, error::ApiError};

/// `POST /stories` returns 201 + `{"success":true,"id":"<uuid>"}`.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  body: Result<Json<NewSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubmissionStore,
{
  let Json(body) = body?;
  body.validate()?;

  let submission = state.submissions.append(body).await.map_err(|e| {
    tracing::error!(error = %e, "failed to store submission");
    ApiError::Submission(Box::new(e))
  })?;

  tracing::info!(id = %submission.id, "story submitted");
  Ok((
    StatusCode::CREATED,
    Json(json!({ "success": true, "id": submission.id })),
  ))
}
