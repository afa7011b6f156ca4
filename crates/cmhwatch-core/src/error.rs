//! Error types for `cmhwatch-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("story must not be empty")]
  EmptyStory,

  #[error("consent is required to submit a story")]
  ConsentRequired,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
