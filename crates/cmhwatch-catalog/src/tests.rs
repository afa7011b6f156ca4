//! Loading and validation tests for [`Catalog`].

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use cmhwatch_core::{
  content::FactCategory,
  person::PersonCategory,
  repository::PersonRepository,
  status::{ContactStatus, ContactSummary, StatusTally},
};

use crate::{Catalog, Error};

const PEOPLE: &str = r#"
[[people]]
slug = "avery-stone"
name = "Avery Stone"
title = "Chief Executive"
organization = "Example General Hospital"
category = "hospital-leadership"
responsibilities = "Runs the hospital."

[people.contactInfo]
email = "ceo@example.org"

[[people.communications]]
date = "2026-01-01"
method = "email"
recipientName = "Avery Stone"
subject = "Complaint records"
content = "Please share the complaint records."

[people.communications.response]
date = "2026-01-05"
content = "We are reviewing your request."

[[people.communications]]
date = "2026-02-01"
method = "letter"
recipientName = "Avery Stone"
subject = "Follow-up"
content = "Following up on our January email."

[[people]]
slug = "blake-ortiz"
name = "Blake Ortiz"
title = "Chief of Emergency"
organization = "Example General Hospital"
category = "department-chief"
responsibilities = "Leads the emergency department."

[[people.communications]]
date = "2026-01-15"
method = "foi-request"
recipientName = "FOI Office"
subject = "Wait times"
content = "Records request."

[people.communications.response]
date = "2026-01-20"
content = "Acknowledged."

[[people]]
slug = "casey-lin"
name = "Casey Lin"
title = "Councillor"
organization = "City of Example"
category = "government-official"
responsibilities = "Sits on the health committee."
"#;

const CONTENT: &str = r#"
stories = []

[[facts]]
id = "foi-001"
title = "First request"
date = "2026-01-15"
category = "foi-request"
status = "pending"
summary = "Filed."
content = "Full text."
recipientSlug = "blake-ortiz"

[[facts]]
id = "doc-001"
title = "Annual report"
date = "2026-03-01"
category = "document"
status = "completed"
summary = "Published."
content = "Full text."

[[timeline]]
date = "2026-01-01"
title = "Launch"
description = "Site launched."
category = "community-update"

[[timeline]]
date = "2026-02-01"
title = "Letter sent"
description = "Follow-up letter."
personSlugs = ["avery-stone"]
category = "letter-sent"

[[timeline]]
date = "2026-02-01"
title = "Same-day update"
description = "Declared after the letter."
category = "media"

[[templates]]
id = "ceo-letter"
title = "Letter to the CEO"
recipientName = "Avery Stone"
recipientSlug = "avery-stone"
recipientTitle = "Chief Executive"
recipientAddress = "1 Main Street"
description = "Write to the CEO."
body = "Dear [NAME],"
ccList = ["CMH Watch"]

[[templates]]
id = "general"
title = "General letter"
recipientName = "Patient Relations"
recipientTitle = "Office"
recipientAddress = "1 Main Street"
description = "Write to patient relations."
body = "To whom it may concern,"
"#;

fn fixture() -> Catalog {
  Catalog::from_sources(PEOPLE, CONTENT).expect("fixture catalog")
}

// ─── Repository ──────────────────────────────────────────────────────────────

#[test]
fn all_people_in_declaration_order() {
  let catalog = fixture();
  let slugs: Vec<_> =
    catalog.all_people().iter().map(|p| p.slug.as_str()).collect();
  assert_eq!(slugs, ["avery-stone", "blake-ortiz", "casey-lin"]);
}

#[test]
fn slug_lookup_round_trips() {
  let catalog = fixture();
  for person in catalog.all_people() {
    assert_eq!(catalog.person_by_slug(&person.slug), Some(person));
  }
  assert!(catalog.person_by_slug("nobody").is_none());
  assert!(catalog.person_by_slug("").is_none());
}

#[test]
fn categories_partition_all_people() {
  let catalog = fixture();
  let mut seen = HashSet::new();
  let mut total = 0;
  for category in PersonCategory::ALL {
    for person in catalog.people_by_category(category) {
      assert_eq!(person.category, category);
      assert!(seen.insert(person.slug.clone()), "duplicate {}", person.slug);
      total += 1;
    }
  }
  assert_eq!(total, catalog.all_people().len());
}

#[test]
fn optional_contact_fields_stay_absent() {
  let catalog = fixture();
  let avery = catalog.person_by_slug("avery-stone").unwrap();
  assert_eq!(avery.contact_info.email.as_deref(), Some("ceo@example.org"));
  assert!(avery.contact_info.phone.is_none());
  assert!(avery.contact_info.address.is_none());
}

#[test]
fn derived_status_from_loaded_communications() {
  let catalog = fixture();
  let now = Utc.with_ymd_and_hms(2026, 2, 11, 8, 0, 0).unwrap();

  let avery = catalog.person_by_slug("avery-stone").unwrap();
  assert_eq!(ContactSummary::derive(avery, now), ContactSummary {
    status:                  ContactStatus::NoResponse,
    days_since_last_contact: Some(10),
  });

  let blake = catalog.person_by_slug("blake-ortiz").unwrap();
  assert_eq!(
    ContactSummary::derive(blake, now).status,
    ContactStatus::Responded
  );

  assert_eq!(StatusTally::from_people(catalog.all_people()), StatusTally {
    tracked:   3,
    contacted: 2,
    responded: 1,
  });
}

// ─── Content ─────────────────────────────────────────────────────────────────

#[test]
fn timeline_is_newest_first_with_stable_ties() {
  let catalog = fixture();
  let titles: Vec<_> =
    catalog.timeline().iter().map(|e| e.title.as_str()).collect();
  assert_eq!(titles, ["Letter sent", "Same-day update", "Launch"]);
}

#[test]
fn facts_sorted_and_filterable() {
  let catalog = fixture();
  let ids: Vec<_> = catalog.facts().iter().map(|f| f.id.as_str()).collect();
  assert_eq!(ids, ["doc-001", "foi-001"]);

  let requests = catalog.facts_by_category(FactCategory::FoiRequest);
  assert_eq!(requests.len(), 1);
  assert_eq!(requests[0].id, "foi-001");
  assert!(catalog.fact("missing").is_none());
}

#[test]
fn per_person_content_links() {
  let catalog = fixture();
  let templates = catalog.templates_for("avery-stone");
  assert_eq!(templates.len(), 1);
  assert_eq!(templates[0].id, "ceo-letter");
  assert!(catalog.templates_for("casey-lin").is_empty());

  let events = catalog.timeline_for("avery-stone");
  assert_eq!(events.len(), 1);
  assert_eq!(events[0].title, "Letter sent");

  assert_eq!(
    catalog.template("general").and_then(|t| t.recipient_slug.clone()),
    None
  );
}

// ─── Validation ──────────────────────────────────────────────────────────────

const MINIMAL_PERSON: &str = r#"
[[people]]
slug = "avery-stone"
name = "Avery Stone"
title = "Chief Executive"
organization = "Example General Hospital"
category = "hospital-leadership"
responsibilities = "Runs the hospital."
"#;

#[test]
fn duplicate_slug_is_rejected() {
  let people = format!("{MINIMAL_PERSON}{MINIMAL_PERSON}");
  let err = Catalog::from_sources(&people, "").unwrap_err();
  assert!(matches!(err, Error::DuplicateSlug(ref s) if s == "avery-stone"));
}

#[test]
fn unsafe_slug_is_rejected() {
  let people = MINIMAL_PERSON.replace("avery-stone", "Avery Stone");
  let err = Catalog::from_sources(&people, "").unwrap_err();
  assert!(matches!(err, Error::InvalidSlug(_)));
}

#[test]
fn dangling_template_recipient_is_rejected() {
  let content = r#"
[[templates]]
id = "x"
title = "x"
recipientName = "Nobody"
recipientSlug = "nobody"
recipientTitle = "x"
recipientAddress = "x"
description = "x"
body = "x"
"#;
  let err = Catalog::from_sources(MINIMAL_PERSON, content).unwrap_err();
  match err {
    Error::UnknownPersonSlug {
      slug,
      referenced_by,
    } => {
      assert_eq!(slug, "nobody");
      assert!(referenced_by.contains("template"), "{referenced_by}");
    }
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn dangling_timeline_person_is_rejected() {
  let content = r#"
[[timeline]]
date = "2026-01-01"
title = "Event"
description = "x"
personSlugs = ["avery-stone", "ghost"]
category = "media"
"#;
  let err = Catalog::from_sources(MINIMAL_PERSON, content).unwrap_err();
  assert!(matches!(err, Error::UnknownPersonSlug { ref slug, .. } if slug == "ghost"));
}

#[test]
fn duplicate_fact_id_is_rejected() {
  let fact = r#"
[[facts]]
id = "foi-001"
title = "x"
date = "2026-01-01"
category = "finding"
status = "pending"
summary = "x"
content = "x"
"#;
  let content = format!("{fact}{fact}");
  let err = Catalog::from_sources(MINIMAL_PERSON, &content).unwrap_err();
  assert!(matches!(err, Error::DuplicateId { kind: "fact", .. }));
}

#[test]
fn parse_error_names_the_file() {
  let err =
    Catalog::from_sources(MINIMAL_PERSON, "[[facts]]\nid = ").unwrap_err();
  assert!(matches!(err, Error::Parse { file: "content.toml", .. }));

  let bad_category = MINIMAL_PERSON.replace("hospital-leadership", "janitor");
  let err = Catalog::from_sources(&bad_category, "").unwrap_err();
  assert!(matches!(err, Error::Parse { file: "people.toml", .. }));
}

#[test]
fn inverted_response_date_is_accepted() {
  let people = format!(
    "{MINIMAL_PERSON}{}",
    r#"
[[people.communications]]
date = "2026-02-01"
method = "phone"
recipientName = "Avery Stone"
subject = "Call"
content = "Phone call."

[people.communications.response]
date = "2026-01-01"
content = "Recorded with the wrong date."
"#
  );
  let catalog = Catalog::from_sources(&people, "").unwrap();
  let avery = catalog.person_by_slug("avery-stone").unwrap();
  assert!(avery.communications[0].response_predates_contact());
}

// ─── Sources ─────────────────────────────────────────────────────────────────

#[test]
fn fingerprint_tracks_source_changes() {
  let a = Catalog::from_sources(MINIMAL_PERSON, "").unwrap();
  let b = Catalog::from_sources(MINIMAL_PERSON, "").unwrap();
  let c = Catalog::from_sources(MINIMAL_PERSON, "stories = []").unwrap();
  assert_eq!(a.fingerprint(), b.fingerprint());
  assert_ne!(a.fingerprint(), c.fingerprint());
  assert_eq!(a.fingerprint().len(), 64);
}

#[test]
fn load_dir_reads_both_files() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("people.toml"), PEOPLE).unwrap();
  std::fs::write(dir.path().join("content.toml"), CONTENT).unwrap();

  let catalog = Catalog::load_dir(dir.path()).unwrap();
  assert_eq!(catalog.all_people().len(), 3);
  assert_eq!(catalog.templates().len(), 2);
}

#[test]
fn load_dir_without_content_file() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("people.toml"), MINIMAL_PERSON).unwrap();

  let catalog = Catalog::load_dir(dir.path()).unwrap();
  assert_eq!(catalog.all_people().len(), 1);
  assert!(catalog.facts().is_empty());
  assert!(catalog.timeline().is_empty());
}

#[test]
fn load_dir_without_people_file_fails() {
  let dir = tempfile::tempdir().unwrap();
  let err = Catalog::load_dir(dir.path()).unwrap_err();
  assert!(matches!(err, Error::Io { .. }));
}

// ─── Embedded dataset ────────────────────────────────────────────────────────

#[test]
fn embedded_dataset_is_valid() {
  let catalog = Catalog::embedded().expect("embedded catalog");

  let ceo = catalog.person_by_slug("patrick-gaskin").expect("patrick-gaskin");
  assert_eq!(ceo.name, "Patrick Gaskin");
  assert_eq!(ceo.category, PersonCategory::HospitalLeadership);

  for template in catalog.templates() {
    if let Some(slug) = &template.recipient_slug {
      assert!(catalog.person_by_slug(slug).is_some(), "{slug}");
    }
  }
  assert!(catalog.template("patient-ombudsman").is_some());
  assert!(!catalog.people_by_category(PersonCategory::GovernmentOfficial).is_empty());
}
