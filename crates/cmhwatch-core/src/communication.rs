//! Outbound contact attempts and their (optional) replies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The channel a communication was sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactMethod {
  Email,
  Letter,
  Phone,
  InPerson,
  FoiRequest,
}

/// A reply received for a communication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
  pub date:    NaiveDate,
  pub content: String,
}

/// One outbound contact attempt. Owned by exactly one
/// [`Person`](crate::person::Person).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
  pub date:           NaiveDate,
  pub method:         ContactMethod,
  pub recipient_name: String,
  pub subject:        String,
  pub content:        String,
  /// `None` while the communication is still unanswered.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub response:       Option<Response>,
}

impl Communication {
  pub fn has_response(&self) -> bool { self.response.is_some() }

  /// `true` if the recorded reply predates the communication itself.
  pub fn response_predates_contact(&self) -> bool {
    self.response.as_ref().is_some_and(|r| r.date < self.date)
  }
}
