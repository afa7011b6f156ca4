//! The `PersonRepository` trait, the only read path to Person records.
//!
//! Implemented by `cmhwatch-catalog` over its in-memory dataset. Higher
//! layers depend on this abstraction, so the backing source can change
//! without touching callers.

use crate::person::{Person, PersonCategory};

/// Read-only access to the tracked people.
///
/// Implementations are populated once and never mutated afterwards, so
/// shared references may be read concurrently without locking.
pub trait PersonRepository: Send + Sync {
  /// Every person, in declaration order, without duplicates.
  fn all_people(&self) -> &[Person];

  /// Exact-match lookup. Returns `None` for an unknown slug.
  fn person_by_slug(&self, slug: &str) -> Option<&Person> {
    self.all_people().iter().find(|p| p.slug == slug)
  }

  /// People in `category`, preserving declaration order.
  fn people_by_category(&self, category: PersonCategory) -> Vec<&Person> {
    self
      .all_people()
      .iter()
      .filter(|p| p.category == category)
      .collect()
  }
}

impl PersonRepository for Vec<Person> {
  fn all_people(&self) -> &[Person] { self }
}
