//! Person: a tracked official or body with an accountability profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::communication::Communication;

/// The group a person is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonCategory {
  HospitalLeadership,
  DepartmentChief,
  BoardMember,
  GovernmentOfficial,
  RegulatoryBody,
}

impl PersonCategory {
  /// Every category, in display order.
  pub const ALL: [PersonCategory; 5] = [
    Self::HospitalLeadership,
    Self::DepartmentChief,
    Self::BoardMember,
    Self::GovernmentOfficial,
    Self::RegulatoryBody,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::HospitalLeadership => "hospital-leadership",
      Self::DepartmentChief => "department-chief",
      Self::BoardMember => "board-member",
      Self::GovernmentOfficial => "government-official",
      Self::RegulatoryBody => "regulatory-body",
    }
  }

  /// Section heading used by the accountability listing.
  pub fn label(&self) -> &'static str {
    match self {
      Self::HospitalLeadership => "Hospital Leadership",
      Self::DepartmentChief => "Department Chiefs",
      Self::BoardMember => "Board of Directors",
      Self::GovernmentOfficial => "Government Officials",
      Self::RegulatoryBody => "Regulatory & Oversight Bodies",
    }
  }

  pub fn description(&self) -> Option<&'static str> {
    match self {
      Self::HospitalLeadership => Some(
        "The executives and board members who run Cambridge Memorial \
         Hospital and set its policies.",
      ),
      Self::DepartmentChief => Some(
        "The physicians who lead each clinical department and are \
         responsible for care standards in their area.",
      ),
      Self::BoardMember => None,
      Self::GovernmentOfficial => Some(
        "The elected officials responsible for healthcare oversight, \
         funding, and representing Cambridge residents.",
      ),
      Self::RegulatoryBody => Some(
        "The independent bodies that regulate healthcare professionals and \
         investigate complaints in Ontario.",
      ),
    }
  }
}

/// Ways to reach a person. Any subset may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,
}

/// A dated, sourced quote attributed to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicStatement {
  pub date:    NaiveDate,
  pub source:  String,
  pub content: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url:     Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  /// URL-safe identity key, unique across the repository.
  pub slug:              String,
  pub name:              String,
  pub title:             String,
  pub organization:      String,
  pub category:          PersonCategory,
  /// Why this person is accountable.
  pub responsibilities:  String,
  #[serde(default)]
  pub contact_info:      ContactInfo,
  #[serde(default)]
  pub communications:    Vec<Communication>,
  #[serde(default)]
  pub public_statements: Vec<PublicStatement>,
}

/// `true` if `slug` is non-empty and made only of lowercase ASCII letters,
/// digits and `-`.
pub fn is_url_safe_slug(slug: &str) -> bool {
  !slug.is_empty()
    && slug
      .bytes()
      .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
