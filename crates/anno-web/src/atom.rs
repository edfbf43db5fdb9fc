//! Atom (RFC 4287) rendering of the feed.
//!
//! Uses `quick-xml`'s writer API. Entry ids are the absolute URLs of the
//! records' detail pages, so they are stable across restarts.

use std::io::Cursor;

use anno_core::feed::FeedItem;
use chrono::{DateTime, Utc};
use quick_xml::{
  Writer,
  events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{SiteConfig, layout::SITE_NAME};

pub const NS_ATOM: &str = "http://www.w3.org/2005/Atom";

type W = Writer<Cursor<Vec<u8>>>;

/// Render `items` as an Atom document. `updated` stamps the feed and every
/// entry; the corpus carries no modification times of its own.
pub fn render(
  site: &SiteConfig,
  items: &[FeedItem],
  updated: DateTime<Utc>,
) -> std::io::Result<String> {
  let mut w = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
  let stamp = updated.to_rfc3339();

  w.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
  let mut feed = BytesStart::new("feed");
  feed.push_attribute(("xmlns", NS_ATOM));
  w.write_event(Event::Start(feed))?;

  text_elem(&mut w, "title", SITE_NAME)?;
  text_elem(&mut w, "id", &site.absolute("/"))?;
  link(&mut w, &site.absolute("/feed.xml"), Some("self"))?;
  link(&mut w, &site.absolute("/feed"), None)?;
  text_elem(&mut w, "updated", &stamp)?;

  for item in items {
    w.write_event(Event::Start(BytesStart::new("entry")))?;
    let url = site.absolute(&item.path);
    text_elem(&mut w, "title", &item.title)?;
    text_elem(&mut w, "id", &url)?;
    link(&mut w, &url, None)?;
    text_elem(&mut w, "updated", &stamp)?;
    text_elem(&mut w, "summary", &item.summary)?;
    let mut category = BytesStart::new("category");
    category.push_attribute(("term", item.kind.as_str()));
    w.write_event(Event::Empty(category))?;
    w.write_event(Event::End(BytesEnd::new("entry")))?;
  }

  w.write_event(Event::End(BytesEnd::new("feed")))?;

  let bytes = w.into_inner().into_inner();
  String::from_utf8(bytes)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

fn text_elem(w: &mut W, tag: &str, text: &str) -> std::io::Result<()> {
  w.write_event(Event::Start(BytesStart::new(tag)))?;
  w.write_event(Event::Text(BytesText::new(text)))?;
  w.write_event(Event::End(BytesEnd::new(tag)))
}

fn link(w: &mut W, href: &str, rel: Option<&str>) -> std::io::Result<()> {
  let mut el = BytesStart::new("link");
  el.push_attribute(("href", href));
  if let Some(rel) = rel {
    el.push_attribute(("rel", rel));
  }
  w.write_event(Event::Empty(el))
}
