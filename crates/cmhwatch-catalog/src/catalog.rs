//! [`Catalog`]: the validated, immutable dataset.

use std::{collections::HashMap, collections::HashSet, path::Path};

use cmhwatch_core::{
  content::{CommunityStory, FactCategory, FactEntry, LetterTemplate, TimelineEntry},
  person::{Person, is_url_safe_slug},
  repository::PersonRepository,
};
use sha2::{Digest, Sha256};

use crate::{
  Error, Result,
  source::{
    CONTENT_FILE, ContentFile, EMBEDDED_CONTENT, EMBEDDED_PEOPLE, PEOPLE_FILE,
    PeopleFile, parse_content, parse_people,
  },
};

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// People and site content, loaded once and read-only afterwards.
///
/// Facts, timeline entries and stories are held newest first; entries that
/// share a date keep their declaration order.
#[derive(Debug)]
pub struct Catalog {
  people:      Vec<Person>,
  slug_index:  HashMap<String, usize>,
  facts:       Vec<FactEntry>,
  timeline:    Vec<TimelineEntry>,
  templates:   Vec<LetterTemplate>,
  stories:     Vec<CommunityStory>,
  fingerprint: String,
}

impl Catalog {
  /// The dataset compiled into this binary.
  pub fn embedded() -> Result<Self> {
    Self::from_sources(EMBEDDED_PEOPLE, EMBEDDED_CONTENT)
  }

  /// Load `people.toml` and `content.toml` from `dir`. A missing
  /// `content.toml` is treated as empty content.
  pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
    let dir = dir.as_ref();
    let people = read_file(&dir.join(PEOPLE_FILE))?;
    let content_path = dir.join(CONTENT_FILE);
    let content = match std::fs::read_to_string(&content_path) {
      Ok(s) => s,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
      Err(source) => {
        return Err(Error::Io {
          path: content_path,
          source,
        });
      }
    };
    tracing::debug!(dir = %dir.display(), "loading catalog from directory");
    Self::from_sources(&people, &content)
  }

  /// Parse and validate the two dataset sources.
  pub fn from_sources(people: &str, content: &str) -> Result<Self> {
    let fingerprint = fingerprint(people, content);
    let people_file = parse_people(people)?;
    let content_file = parse_content(content)?;
    Self::build(people_file, content_file, fingerprint)
  }

  fn build(
    people_file: PeopleFile,
    content_file: ContentFile,
    fingerprint: String,
  ) -> Result<Self> {
    let people = people_file.people;

    let mut slug_index = HashMap::with_capacity(people.len());
    for (i, person) in people.iter().enumerate() {
      if !is_url_safe_slug(&person.slug) {
        return Err(Error::InvalidSlug(person.slug.clone()));
      }
      if slug_index.insert(person.slug.clone(), i).is_some() {
        return Err(Error::DuplicateSlug(person.slug.clone()));
      }
      for comm in &person.communications {
        if comm.response_predates_contact() {
          tracing::warn!(
            slug = %person.slug,
            date = %comm.date,
            subject = %comm.subject,
            "response is dated before the communication it answers"
          );
        }
      }
    }

    let ContentFile {
      mut facts,
      mut timeline,
      templates,
      mut stories,
    } = content_file;

    let known = |slug: &str, referenced_by: String| {
      if slug_index.contains_key(slug) {
        Ok(())
      } else {
        Err(Error::UnknownPersonSlug {
          slug: slug.to_string(),
          referenced_by,
        })
      }
    };

    ensure_unique_ids("fact", facts.iter().map(|f| f.id.as_str()))?;
    for fact in &facts {
      if let Some(slug) = &fact.recipient_slug {
        known(slug, format!("fact {:?}", fact.id))?;
      }
    }

    for entry in &timeline {
      for slug in &entry.person_slugs {
        known(slug, format!("timeline entry {:?}", entry.title))?;
      }
    }

    ensure_unique_ids("template", templates.iter().map(|t| t.id.as_str()))?;
    for template in &templates {
      if let Some(slug) = &template.recipient_slug {
        known(slug, format!("template {:?}", template.id))?;
      }
    }

    ensure_unique_ids("story", stories.iter().map(|s| s.id.as_str()))?;

    // `sort_by` is stable, so same-day entries keep their authored order.
    facts.sort_by(|a, b| b.date.cmp(&a.date));
    timeline.sort_by(|a, b| b.date.cmp(&a.date));
    stories.sort_by(|a, b| b.published_date.cmp(&a.published_date));

    tracing::info!(
      people = people.len(),
      facts = facts.len(),
      timeline = timeline.len(),
      templates = templates.len(),
      stories = stories.len(),
      "catalog loaded"
    );

    Ok(Self {
      people,
      slug_index,
      facts,
      timeline,
      templates,
      stories,
      fingerprint,
    })
  }

  // ── Content ───────────────────────────────────────────────────────────

  pub fn facts(&self) -> &[FactEntry] { &self.facts }

  pub fn fact(&self, id: &str) -> Option<&FactEntry> {
    self.facts.iter().find(|f| f.id == id)
  }

  pub fn facts_by_category(&self, category: FactCategory) -> Vec<&FactEntry> {
    self.facts.iter().filter(|f| f.category == category).collect()
  }

  pub fn timeline(&self) -> &[TimelineEntry] { &self.timeline }

  /// Timeline entries that involve the person with `slug`.
  pub fn timeline_for(&self, slug: &str) -> Vec<&TimelineEntry> {
    self
      .timeline
      .iter()
      .filter(|e| e.person_slugs.iter().any(|s| s == slug))
      .collect()
  }

  pub fn templates(&self) -> &[LetterTemplate] { &self.templates }

  pub fn template(&self, id: &str) -> Option<&LetterTemplate> {
    self.templates.iter().find(|t| t.id == id)
  }

  /// Letter templates addressed to the person with `slug`.
  pub fn templates_for(&self, slug: &str) -> Vec<&LetterTemplate> {
    self
      .templates
      .iter()
      .filter(|t| t.recipient_slug.as_deref() == Some(slug))
      .collect()
  }

  pub fn stories(&self) -> &[CommunityStory] { &self.stories }

  /// Hex SHA-256 of the dataset sources; changes whenever the data does.
  pub fn fingerprint(&self) -> &str { &self.fingerprint }
}

impl PersonRepository for Catalog {
  fn all_people(&self) -> &[Person] { &self.people }

  fn person_by_slug(&self, slug: &str) -> Option<&Person> {
    self.slug_index.get(slug).map(|&i| &self.people[i])
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn read_file(path: &Path) -> Result<String> {
  std::fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })
}

fn ensure_unique_ids<'a>(
  kind: &'static str,
  ids: impl Iterator<Item = &'a str>,
) -> Result<()> {
  let mut seen = HashSet::new();
  for id in ids {
    if !seen.insert(id) {
      return Err(Error::DuplicateId {
        kind,
        id: id.to_string(),
      });
    }
  }
  Ok(())
}

fn fingerprint(people: &str, content: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(people.as_bytes());
  hasher.update([0u8]);
  hasher.update(content.as_bytes());
  hex::encode(hasher.finalize())
}
