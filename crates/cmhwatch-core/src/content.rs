//! Hand-authored site content: documented facts, the campaign timeline,
//! letter templates and curated community stories.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Facts ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactCategory {
  FoiRequest,
  FoiResponse,
  Document,
  Finding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactStatus {
  Pending,
  InProgress,
  Completed,
  Denied,
  Appealed,
}

/// A documented record: a filed request, a response, a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactEntry {
  pub id:             String,
  pub title:          String,
  pub date:           NaiveDate,
  pub category:       FactCategory,
  pub status:         FactStatus,
  pub summary:        String,
  /// Full text of the record.
  pub content:        String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub recipient_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub recipient_slug: Option<String>,
}

// ─── Timeline ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineCategory {
  FoiRequest,
  LetterSent,
  ResponseReceived,
  CommunityUpdate,
  Media,
  Government,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
  pub date:         NaiveDate,
  pub title:        String,
  pub description:  String,
  /// People involved in this event.
  #[serde(default)]
  pub person_slugs: Vec<String>,
  pub category:     TimelineCategory,
}

// ─── Letter templates ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterTemplate {
  pub id:                String,
  pub title:             String,
  pub recipient_name:    String,
  /// Set when the recipient has a profile.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub recipient_slug:    Option<String>,
  pub recipient_title:   String,
  pub recipient_address: String,
  pub description:       String,
  /// Letter text with `[PLACEHOLDER]` markers for the sender to fill in.
  pub body:              String,
  #[serde(default)]
  pub cc_list:           Vec<String>,
}

impl LetterTemplate {
  /// The distinct `[PLACEHOLDER]` markers in the body, in first-seen order.
  ///
  /// Markers may nest (`[IF APPLICABLE: ... [DATE] ...]`); only the
  /// innermost bracket pairs are reported.
  pub fn placeholders(&self) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    let mut open = None;
    for (i, c) in self.body.char_indices() {
      match c {
        '[' => open = Some(i),
        ']' => {
          if let Some(start) = open.take() {
            let marker = &self.body[start..=i];
            if !found.contains(&marker) {
              found.push(marker);
            }
          }
        }
        _ => {}
      }
    }
    found
  }
}

// ─── Community stories ───────────────────────────────────────────────────────

/// A reviewed community story approved for publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStory {
  pub id:                  String,
  pub story:               String,
  pub incident_date_range: String,
  pub department:          String,
  /// Full name, first name, or "Anonymous community member".
  pub attribution:         String,
  pub published_date:      NaiveDate,
}
