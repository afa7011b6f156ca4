//! Community story submissions and the `SubmissionStore` trait.
//!
//! Submissions are written once and never fed back into the
//! Person/Communication model. The payload is accepted as sent by the intake
//! form: known fields are typed, anything else is preserved verbatim.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// How the submitter wants to be credited if the story is published.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityPreference {
  Named,
  FirstName,
  /// Identity shared with reviewers only.
  AnonymousIdentified,
  #[default]
  Anonymous,
}

/// Payload accepted by the intake endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
  #[serde(default)]
  pub story:               String,
  #[serde(
    default,
    deserialize_with = "blank_as_none",
    skip_serializing_if = "Option::is_none"
  )]
  pub incident_date:       Option<String>,
  #[serde(
    default,
    deserialize_with = "blank_as_none",
    skip_serializing_if = "Option::is_none"
  )]
  pub department:          Option<String>,
  /// Held privately; never published without verification.
  #[serde(
    default,
    deserialize_with = "blank_as_none",
    skip_serializing_if = "Option::is_none"
  )]
  pub staff_involved:      Option<String>,
  #[serde(default)]
  pub identity_preference: IdentityPreference,
  #[serde(
    default,
    deserialize_with = "blank_as_none",
    skip_serializing_if = "Option::is_none"
  )]
  pub name:                Option<String>,
  #[serde(
    default,
    deserialize_with = "blank_as_none",
    skip_serializing_if = "Option::is_none"
  )]
  pub contact:             Option<String>,
  #[serde(default, deserialize_with = "checkbox")]
  pub consent:             bool,
  /// Any fields not modelled above.
  #[serde(flatten)]
  pub extra:               serde_json::Map<String, serde_json::Value>,
}

impl NewSubmission {
  /// Convenience constructor for a consented, anonymous story.
  pub fn new(story: impl Into<String>) -> Self {
    Self {
      story:               story.into(),
      incident_date:       None,
      department:          None,
      staff_involved:      None,
      identity_preference: IdentityPreference::default(),
      name:                None,
      contact:             None,
      consent:             true,
      extra:               serde_json::Map::new(),
    }
  }

  /// Check the fields the intake form marks as required.
  pub fn validate(&self) -> Result<()> {
    if self.story.trim().is_empty() {
      return Err(Error::EmptyStory);
    }
    if !self.consent {
      return Err(Error::ConsentRequired);
    }
    Ok(())
  }
}

/// A persisted submission. `id`, `submitted_at` and `reviewed` are assigned
/// by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
  pub id:           Uuid,
  pub submitted_at: DateTime<Utc>,
  pub reviewed:     bool,
  #[serde(flatten)]
  pub payload:      NewSubmission,
}

/// Keys owned by the store. Copies sent in a payload are discarded.
pub const ASSIGNED_FIELDS: [&str; 3] = ["id", "submittedAt", "reviewed"];

impl Submission {
  /// A fresh, unreviewed record for `payload`.
  pub fn new(
    id: Uuid,
    submitted_at: DateTime<Utc>,
    mut payload: NewSubmission,
  ) -> Self {
    for key in ASSIGNED_FIELDS {
      payload.extra.remove(key);
    }
    Self {
      id,
      submitted_at,
      reviewed: false,
      payload,
    }
  }
}

/// Append-only sink for submissions.
pub trait SubmissionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `input` and return the stored record.
  fn append(
    &self,
    input: NewSubmission,
  ) -> impl Future<Output = Result<Submission, Self::Error>> + Send + '_;
}

// ─── Form-field decoding ─────────────────────────────────────────────────────

/// Empty or whitespace-only form fields mean "not provided".
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<String>::deserialize(deserializer)?;
  Ok(value.filter(|s| !s.trim().is_empty()))
}

/// HTML checkboxes post `"on"`; JSON clients send a boolean.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Checkbox {
    Flag(bool),
    Text(String),
  }

  Ok(match Checkbox::deserialize(deserializer)? {
    Checkbox::Flag(flag) => flag,
    Checkbox::Text(text) => {
      matches!(text.to_ascii_lowercase().as_str(), "on" | "true" | "yes")
    }
  })
}
