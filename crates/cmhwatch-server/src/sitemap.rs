//! `sitemap.xml` generation.
//!
//! Uses `quick-xml`'s writer API. Every URL carries today's date as its
//! `lastmod`.

use std::io::Cursor;

use axum::{
  extract::State,
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use cmhwatch_core::repository::PersonRepository;
use quick_xml::{
  Writer,
  events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::SiteState;

pub const NS_SITEMAP: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Section pages listed after the home page, in order.
pub const SECTIONS: [&str; 5] = [
  "/facts",
  "/accountability",
  "/community-voices",
  "/take-action",
  "/timeline",
];

/// Render the sitemap for `base_url`, the fixed sections and one profile
/// page per slug.
pub fn render<'a>(
  base_url: &str,
  slugs: impl IntoIterator<Item = &'a str>,
  today: NaiveDate,
) -> std::io::Result<Vec<u8>> {
  let base = base_url.trim_end_matches('/');
  let lastmod = today.format("%Y-%m-%d").to_string();

  let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
  writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

  let mut urlset = BytesStart::new("urlset");
  urlset.push_attribute(("xmlns", NS_SITEMAP));
  writer.write_event(Event::Start(urlset))?;

  write_url(&mut writer, base, &lastmod)?;
  for section in SECTIONS {
    write_url(&mut writer, &format!("{base}{section}"), &lastmod)?;
  }
  for slug in slugs {
    write_url(&mut writer, &format!("{base}/accountability/{slug}"), &lastmod)?;
  }

  writer.write_event(Event::End(BytesEnd::new("urlset")))?;
  Ok(writer.into_inner().into_inner())
}

fn write_url(
  writer: &mut Writer<Cursor<Vec<u8>>>,
  loc: &str,
  lastmod: &str,
) -> std::io::Result<()> {
  writer.write_event(Event::Start(BytesStart::new("url")))?;
  write_text_element(writer, "loc", loc)?;
  write_text_element(writer, "lastmod", lastmod)?;
  writer.write_event(Event::End(BytesEnd::new("url")))?;
  Ok(())
}

fn write_text_element(
  writer: &mut Writer<Cursor<Vec<u8>>>,
  name: &str,
  text: &str,
) -> std::io::Result<()> {
  writer.write_event(Event::Start(BytesStart::new(name)))?;
  writer.write_event(Event::Text(BytesText::new(text)))?;
  writer.write_event(Event::End(BytesEnd::new(name)))?;
  Ok(())
}

/// `GET /sitemap.xml`
pub async fn handler(State(state): State<SiteState>) -> Response {
  let today = state.clock.now().date_naive();
  let slugs = state.catalog.all_people().iter().map(|p| p.slug.as_str());

  match render(&state.base_url, slugs, today) {
    Ok(body) => {
      ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], body)
        .into_response()
    }
    Err(e) => {
      tracing::error!(error = %e, "failed to render sitemap");
      StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
  }
}
