//! Error type for `cmhwatch-catalog`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse {file}: {source}")]
  Parse {
    file:   &'static str,
    #[source]
    source: toml::de::Error,
  },

  #[error("duplicate person slug: {0:?}")]
  DuplicateSlug(String),

  #[error("slug is not URL-safe: {0:?}")]
  InvalidSlug(String),

  #[error("duplicate {kind} id: {id:?}")]
  DuplicateId { kind: &'static str, id: String },

  /// A fact, timeline entry or template names a person that does not exist.
  #[error("{referenced_by} refers to unknown person {slug:?}")]
  UnknownPersonSlug { slug: String, referenced_by: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
