//! Error type for `cmhwatch-store-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("io error on {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// The file exists but does not hold a JSON array. It is left untouched.
  #[error("{} does not contain a JSON array", .0.display())]
  NotAnArray(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
