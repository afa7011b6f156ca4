//! Contact status, derived on every read from a person's communications,
//! never stored.
//!
//! Both derivations select the *most recent* communication by date. The
//! selection is a stable descending sort over a copy of the input, taking
//! the first element: when several communications share the latest date, the
//! one declared first among them wins.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{communication::Communication, person::Person};

const SECONDS_PER_DAY: i64 = 86_400;

/// The outcome of the most recent outreach to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
  NotContacted,
  /// Reserved for an interim "contacted, outcome unknown" state. No
  /// derivation produces it today.
  Contacted,
  NoResponse,
  Responded,
}

impl ContactStatus {
  /// Badge text shown next to a person.
  pub fn label(&self) -> &'static str {
    match self {
      Self::NotContacted => "Not Yet Contacted",
      Self::Contacted => "Contacted",
      Self::NoResponse => "No Response",
      Self::Responded => "Responded",
    }
  }
}

/// The most recent communication, or `None` for an empty slice.
pub fn latest_communication(
  communications: &[Communication],
) -> Option<&Communication> {
  let mut sorted: Vec<&Communication> = communications.iter().collect();
  sorted.sort_by(|a, b| b.date.cmp(&a.date));
  sorted.first().copied()
}

/// Classify a person's communication history.
pub fn contact_status(communications: &[Communication]) -> ContactStatus {
  match latest_communication(communications) {
    None => ContactStatus::NotContacted,
    Some(latest) if latest.has_response() => ContactStatus::Responded,
    Some(_) => ContactStatus::NoResponse,
  }
}

/// Whole days the most recent communication has gone unanswered as of `now`.
///
/// `None` if nothing was ever sent or the latest communication was answered.
/// The communication date is taken as midnight UTC and the difference is
/// floored, so a date in the future yields a negative count.
pub fn days_since_last_contact(
  communications: &[Communication],
  now: DateTime<Utc>,
) -> Option<i64> {
  let latest = latest_communication(communications)?;
  if latest.has_response() {
    return None;
  }
  let sent = latest.date.and_time(NaiveTime::MIN).and_utc();
  Some((now - sent).num_seconds().div_euclid(SECONDS_PER_DAY))
}

// ─── Per-person summary ──────────────────────────────────────────────────────

/// Both derived values for one person, as rendered on a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
  pub status:                  ContactStatus,
  pub days_since_last_contact: Option<i64>,
}

impl ContactSummary {
  pub fn derive(person: &Person, now: DateTime<Utc>) -> Self {
    Self {
      status:                  contact_status(&person.communications),
      days_since_last_contact: days_since_last_contact(
        &person.communications,
        now,
      ),
    }
  }
}

/// Headline counts across a set of people.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTally {
  pub tracked:   usize,
  /// People with any recorded communication.
  pub contacted: usize,
  pub responded: usize,
}

impl StatusTally {
  pub fn from_people<'a>(people: impl IntoIterator<Item = &'a Person>) -> Self {
    people.into_iter().fold(Self::default(), |mut tally, person| {
      let status = contact_status(&person.communications);
      tally.tracked += 1;
      if status != ContactStatus::NotContacted {
        tally.contacted += 1;
      }
      if status == ContactStatus::Responded {
        tally.responded += 1;
      }
      tally
    })
  }
}
