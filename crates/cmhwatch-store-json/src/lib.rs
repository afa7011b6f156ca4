//! JSON-file backend for community story submissions.
//!
//! Every submission is appended to a single JSON array on disk. The file is
//! rewritten through a temporary sibling and an atomic rename, and appends
//! are serialised with an async mutex so concurrent requests never interleave.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonFileStore;
