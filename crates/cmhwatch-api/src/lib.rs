//! JSON API for CMH Watch.
//!
//! Exposes an axum [`Router`] over the [`Catalog`] and any
//! [`SubmissionStore`]. Page rendering, TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", cmhwatch_api::api_router(state))
//! ```

pub mod content;
pub mod error;
pub mod etag;
pub mod people;
pub mod stories;

use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::{DateTime, Utc};
use cmhwatch_catalog::Catalog;
use cmhwatch_core::{clock::Clock, submission::SubmissionStore};

pub use error::ApiError;

// ─── State ────────────────────────────────────────────────────────────────────

/// Shared state threaded through all API handlers.
pub struct ApiState<S> {
  pub catalog:     Arc<Catalog>,
  pub submissions: Arc<S>,
  pub clock:       Arc<dyn Clock>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      catalog:     Arc::clone(&self.catalog),
      submissions: Arc::clone(&self.submissions),
      clock:       Arc::clone(&self.clock),
    }
  }
}

impl<S> ApiState<S> {
  /// The ETag shared by all read responses at `now`.
  pub fn etag(&self, now: DateTime<Utc>) -> String {
    etag::compute_etag(self.catalog.fingerprint(), now.date_naive())
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: SubmissionStore + 'static,
{
  Router::new()
    // People
    .route("/people", get(people::list::<S>))
    .route("/people/{slug}", get(people::get_one::<S>))
    .route("/categories", get(people::categories::<S>))
    .route("/stats", get(people::stats::<S>))
    // Content
    .route("/facts", get(content::facts::<S>))
    .route("/facts/{id}", get(content::fact::<S>))
    .route("/timeline", get(content::timeline::<S>))
    .route("/templates", get(content::templates::<S>))
    .route("/templates/{id}", get(content::template::<S>))
    // Stories
    .route(
      "/stories",
      get(content::stories::<S>).post(stories::create::<S>),
    )
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
