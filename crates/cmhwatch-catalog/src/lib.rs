//! The static CMH Watch dataset.
//!
//! People and site content are authored as two TOML files (`people.toml` and
//! `content.toml`). They are compiled into the binary and can be overridden
//! at startup by loading the same files from a directory. Either way the
//! data is validated once and then served read-only from memory through
//! [`Catalog`].

mod catalog;
mod source;

pub mod error;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use source::{CONTENT_FILE, PEOPLE_FILE};

#[cfg(test)]
mod tests;
