//! Handlers for static site content.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/facts` | Newest first; optional `?category=<category>` |
//! | `GET`  | `/facts/:id` | 404 if not found |
//! | `GET`  | `/timeline` | Newest first |
//! | `GET`  | `/templates` | Letter templates |
//! | `GET`  | `/templates/:id` | 404 if not found |
//! | `GET`  | `/stories` | Published community stories |

use axum::{
  extract::{Path, Query, State},
  http::HeaderMap,
  response::Response,
};
use cmhwatch_core::{content::FactCategory, submission::SubmissionStore};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, etag::cached_json};

#[derive(Debug, Deserialize)]
pub struct FactParams {
  pub category: Option<FactCategory>,
}

/// `GET /facts[?category=<category>]`
pub async fn facts<S>(
  State(state): State<ApiState<S>>,
  Query(params): Query<FactParams>,
  headers: HeaderMap,
) -> Response
where
  S: SubmissionStore,
{
  let etag = state.etag(state.clock.now());
  match params.category {
    Some(category) => {
      cached_json(&headers, &etag, &state.catalog.facts_by_category(category))
    }
    None => cached_json(&headers, &etag, &state.catalog.facts()),
  }
}

/// `GET /facts/:id`
pub async fn fact<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
  headers: HeaderMap,
) -> Result<Response, ApiError>
where
  S: SubmissionStore,
{
  let fact = state
    .catalog
    .fact(&id)
    .ok_or_else(|| ApiError::NotFound(format!("fact {id:?} not found")))?;
  Ok(cached_json(&headers, &state.etag(state.clock.now()), fact))
}

/// `GET /timeline`
pub async fn timeline<S>(
  State(state): State<ApiState<S>>,
  headers: HeaderMap,
) -> Response
where
  S: SubmissionStore,
{
  cached_json(
    &headers,
    &state.etag(state.clock.now()),
    &state.catalog.timeline(),
  )
}

/// `GET /templates`
pub async fn templates<S>(
  State(state): State<ApiState<S>>,
  headers: HeaderMap,
) -> Response
where
  S: SubmissionStore,
{
  cached_json(
    &headers,
    &state.etag(state.clock.now()),
    &state.catalog.templates(),
  )
}

/// `GET /templates/:id`
pub async fn template<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
  headers: HeaderMap,
) -> Result<Response, ApiError>
where
  S: SubmissionStore,
{
  let template = state
    .catalog
    .template(&id)
    .ok_or_else(|| ApiError::NotFound(format!("template {id:?} not found")))?;
  Ok(cached_json(&headers, &state.etag(state.clock.now()), template))
}

/// `GET /stories`
pub async fn stories<S>(
  State(state): State<ApiState<S>>,
  headers: HeaderMap,
) -> Response
where
  S: SubmissionStore,
{
  cached_json(
    &headers,
    &state.etag(state.clock.now()),
    &state.catalog.stories(),
  )
}
