//! On-disk shape of the two dataset files and their parsing.

use cmhwatch_core::{
  content::{CommunityStory, FactEntry, LetterTemplate, TimelineEntry},
  person::Person,
};
use serde::Deserialize;

use crate::{Error, Result};

pub const PEOPLE_FILE: &str = "people.toml";
pub const CONTENT_FILE: &str = "content.toml";

pub(crate) const EMBEDDED_PEOPLE: &str = include_str!("../data/people.toml");
pub(crate) const EMBEDDED_CONTENT: &str = include_str!("../data/content.toml");

#[derive(Debug, Deserialize)]
pub(crate) struct PeopleFile {
  #[serde(default)]
  pub people: Vec<Person>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContentFile {
  #[serde(default)]
  pub facts:     Vec<FactEntry>,
  #[serde(default)]
  pub timeline:  Vec<TimelineEntry>,
  #[serde(default)]
  pub templates: Vec<LetterTemplate>,
  #[serde(default)]
  pub stories:   Vec<CommunityStory>,
}

pub(crate) fn parse_people(source: &str) -> Result<PeopleFile> {
  toml::from_str(source).map_err(|source| Error::Parse {
    file: PEOPLE_FILE,
    source,
  })
}

pub(crate) fn parse_content(source: &str) -> Result<ContentFile> {
  toml::from_str(source).map_err(|source| Error::Parse {
    file: CONTENT_FILE,
    source,
  })
}
