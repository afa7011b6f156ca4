//! ETags and conditional responses for read endpoints.
//!
//! Every read response is a function of the catalog and of today's date (the
//! day counts move at midnight UTC), so one tag covers all of them: a SHA-256
//! over the catalog fingerprint and the date.

use axum::{
  Json,
  http::{HeaderMap, StatusCode, header},
  response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Quoted strong ETag for `fingerprint` as of `today`.
pub fn compute_etag(fingerprint: &str, today: NaiveDate) -> String {
  let mut hasher = Sha256::new();
  hasher.update(fingerprint.as_bytes());
  hasher.update(today.to_string().as_bytes());
  let hash = hasher.finalize();
  format!("\"{}\"", hex::encode(&hash[..16]))
}

/// `true` if `If-None-Match` lists `etag` (weak or strong) or is `*`.
pub fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
  headers
    .get_all(header::IF_NONE_MATCH)
    .iter()
    .filter_map(|v| v.to_str().ok())
    .flat_map(|v| v.split(','))
    .map(str::trim)
    .any(|candidate| {
      candidate == "*" || candidate.trim_start_matches("W/") == etag
    })
}

/// Serialise `body` as JSON tagged with `etag`, or answer `304 Not Modified`
/// when the client already holds it.
pub fn cached_json<T: Serialize>(
  headers: &HeaderMap,
  etag: &str,
  body: &T,
) -> Response {
  if if_none_match(headers, etag) {
    return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag.to_string())])
      .into_response();
  }
  ([(header::ETAG, etag.to_string())], Json(body)).into_response()
}
