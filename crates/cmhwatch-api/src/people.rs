//! Handlers for people and their derived contact status.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/people` | Optional `?category=<category>` |
//! | `GET`  | `/people/:slug` | Full profile; 404 if not found |
//! | `GET`  | `/categories` | People grouped by category, in display order |
//! | `GET`  | `/stats` | Tracked / contacted / responded counts |

use axum::{
  extract::{Path, Query, State},
  http::HeaderMap,
  response::Response,
};
use chrono::{DateTime, Utc};
use cmhwatch_core::{
  content::{LetterTemplate, TimelineEntry},
  person::{Person, PersonCategory},
  repository::PersonRepository,
  status::{ContactSummary, StatusTally},
  submission::SubmissionStore,
};
use serde::{Deserialize, Serialize};

use crate::{ApiState, error::ApiError, etag::cached_json};

// ─── Views ────────────────────────────────────────────────────────────────────

/// One row of the accountability listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary<'a> {
  pub slug:         &'a str,
  pub name:         &'a str,
  pub title:        &'a str,
  pub organization: &'a str,
  pub category:     PersonCategory,
  #[serde(flatten)]
  pub contact:      ContactSummary,
}

impl<'a> PersonSummary<'a> {
  pub fn new(person: &'a Person, now: DateTime<Utc>) -> Self {
    Self {
      slug:         &person.slug,
      name:         &person.name,
      title:        &person.title,
      organization: &person.organization,
      category:     person.category,
      contact:      ContactSummary::derive(person, now),
    }
  }
}

/// A person's full profile page.
#[derive(Debug, Serialize)]
pub struct PersonProfile<'a> {
  #[serde(flatten)]
  pub person:    &'a Person,
  #[serde(flatten)]
  pub contact:   ContactSummary,
  /// Letter templates addressed to this person.
  pub templates: Vec<&'a LetterTemplate>,
  /// Timeline entries involving this person.
  pub timeline:  Vec<&'a TimelineEntry>,
}

#[derive(Debug, Serialize)]
pub struct CategoryGroup<'a> {
  pub category:    PersonCategory,
  pub label:       &'static str,
  pub description: Option<&'static str>,
  pub people:      Vec<PersonSummary<'a>>,
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub category: Option<PersonCategory>,
}

/// `GET /people[?category=<category>]`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  Query(params): Query<ListParams>,
  headers: HeaderMap,
) -> Response
where
  S: SubmissionStore,
{
  let now = state.clock.now();
  let people = match params.category {
    Some(category) => state.catalog.people_by_category(category),
    None => state.catalog.all_people().iter().collect(),
  };
  let body: Vec<_> = people
    .into_iter()
    .map(|p| PersonSummary::new(p, now))
    .collect();
  cached_json(&headers, &state.etag(now), &body)
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /people/:slug`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(slug): Path<String>,
  headers: HeaderMap,
) -> Result<Response, ApiError>
where
  S: SubmissionStore,
{
  let person = state
    .catalog
    .person_by_slug(&slug)
    .ok_or_else(|| ApiError::NotFound(format!("person {slug:?} not found")))?;

  let now = state.clock.now();
  let profile = PersonProfile {
    person,
    contact: ContactSummary::derive(person, now),
    templates: state.catalog.templates_for(&slug),
    timeline: state.catalog.timeline_for(&slug),
  };
  Ok(cached_json(&headers, &state.etag(now), &profile))
}

// ─── Grouped ──────────────────────────────────────────────────────────────────

/// `GET /categories`
pub async fn categories<S>(
  State(state): State<ApiState<S>>,
  headers: HeaderMap,
) -> Response
where
  S: SubmissionStore,
{
  let now = state.clock.now();
  let groups: Vec<_> = PersonCategory::ALL
    .into_iter()
    .map(|category| CategoryGroup {
      category,
      label: category.label(),
      description: category.description(),
      people: state
        .catalog
        .people_by_category(category)
        .into_iter()
        .map(|p| PersonSummary::new(p, now))
        .collect(),
    })
    .collect();
  cached_json(&headers, &state.etag(now), &groups)
}

// ─── Stats ────────────────────────────────────────────────────────────────────

/// `GET /stats`
pub async fn stats<S>(
  State(state): State<ApiState<S>>,
  headers: HeaderMap,
) -> Response
where
  S: SubmissionStore,
{
  let tally = StatusTally::from_people(state.catalog.all_people());
  cached_json(&headers, &state.etag(state.clock.now()), &tally)
}
