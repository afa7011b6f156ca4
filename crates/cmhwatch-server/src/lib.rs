//! HTTP front end for CMH Watch.
//!
//! Mounts the JSON API under `/api` and serves `/sitemap.xml` at the root,
//! with request tracing on every route.

pub mod sitemap;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use cmhwatch_api::{ApiState, api_router};
use cmhwatch_catalog::Catalog;
use cmhwatch_core::{clock::Clock, submission::SubmissionStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CMHWATCH_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:             String,
  #[serde(default = "default_port")]
  pub port:             u16,
  /// Absolute site origin used in the sitemap.
  #[serde(default = "default_base_url")]
  pub base_url:         String,
  #[serde(default = "default_submissions_path")]
  pub submissions_path: PathBuf,
  /// Directory holding `people.toml` and `content.toml`. The embedded
  /// dataset is used when unset.
  #[serde(default)]
  pub catalog_dir:      Option<PathBuf>,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }
fn default_base_url() -> String { "https://cmhwatch.ca".to_string() }
fn default_submissions_path() -> PathBuf { PathBuf::from("submissions.json") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             default_host(),
      port:             default_port(),
      base_url:         default_base_url(),
      submissions_path: default_submissions_path(),
      catalog_dir:      None,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// State for the site-level routes outside `/api`.
#[derive(Clone)]
pub struct SiteState {
  pub catalog:  Arc<Catalog>,
  pub clock:    Arc<dyn Clock>,
  pub base_url: Arc<str>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router.
pub fn router<S>(
  catalog: Arc<Catalog>,
  submissions: Arc<S>,
  clock: Arc<dyn Clock>,
  config: &ServerConfig,
) -> Router
where
  S: SubmissionStore + 'static,
{
  let site = SiteState {
    catalog:  Arc::clone(&catalog),
    clock:    Arc::clone(&clock),
    base_url: Arc::from(config.base_url.as_str()),
  };
  let api = ApiState {
    catalog,
    submissions,
    clock,
  };

  Router::new()
    .route("/sitemap.xml", get(sitemap::handler))
    .with_state(site)
    .nest("/api", api_router(api))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use chrono::{TimeZone, Utc};
  use cmhwatch_core::clock::FixedClock;
  use cmhwatch_store_json::JsonFileStore;
  use tower::ServiceExt as _;

  use super::*;

  fn app(dir: &tempfile::TempDir) -> Router {
    let clock: Arc<dyn Clock> =
      Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap()));
    let store = JsonFileStore::with_clock(
      dir.path().join("submissions.json"),
      Arc::clone(&clock),
    );
    let config = ServerConfig {
      base_url: "https://example.org".to_string(),
      ..ServerConfig::default()
    };
    router(
      Arc::new(Catalog::embedded().unwrap()),
      Arc::new(store),
      clock,
      &config,
    )
  }

  async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
      .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
      .await
      .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
  }

  #[tokio::test]
  async fn sitemap_lists_every_profile() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::embedded().unwrap();

    let resp = app(&dir)
      .oneshot(
        Request::builder()
          .uri("/sitemap.xml")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers().get(header::CONTENT_TYPE).unwrap(),
      "application/xml; charset=utf-8"
    );

    let (_, xml) = get_body(app(&dir), "/sitemap.xml").await;
    for person in cmhwatch_core::repository::PersonRepository::all_people(&catalog)
    {
      let loc = format!(
        "<loc>https://example.org/accountability/{}</loc>",
        person.slug
      );
      assert!(xml.contains(&loc), "missing {loc}");
    }
    assert!(xml.contains("<lastmod>2026-05-01</lastmod>"));
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let dir = tempfile::tempdir().unwrap();

    let (status, body) = get_body(app(&dir), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"tracked\""));

    let (status, _) = get_body(app(&dir), "/stats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[test]
  fn config_defaults_fill_missing_keys() {
    let config: ServerConfig = config::Config::builder()
      .set_override("port", 8080)
      .unwrap()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.submissions_path, PathBuf::from("submissions.json"));
    assert!(config.catalog_dir.is_none());
  }
}
