//! Core types and derivations for the CMH Watch accountability tracker.
//!
//! This crate is deliberately free of HTTP, filesystem and parsing
//! dependencies. Every other crate depends on it; the contact-status
//! derivations in [`status`] are pure functions over borrowed data.

pub mod clock;
pub mod communication;
pub mod content;
pub mod error;
pub mod person;
pub mod repository;
pub mod status;
pub mod submission;

pub use error::{Error, Result};
