//! The aggregated feed: events, documents, sources and quotes normalized into
//! one list that can be ordered and paged.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Error, corpus::Corpus};

// ─── Items ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
  Event,
  Document,
  Source,
  Quote,
}

impl FeedKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Event => "event",
      Self::Document => "document",
      Self::Source => "source",
      Self::Quote => "quote",
    }
  }
}

/// One entry of the feed, pointing back at its record by `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
  pub kind:    FeedKind,
  pub id:      String,
  pub title:   String,
  pub summary: String,
  pub year:    Option<i32>,
  /// Site path of the record's detail page.
  pub path:    String,
}

/// Collect every feed-eligible record, in collection order: events,
/// documents, sources, quotes.
pub fn build_feed<C: Corpus + ?Sized>(corpus: &C) -> Vec<FeedItem> {
  let events = corpus.events().iter().map(|e| FeedItem {
    kind:    FeedKind::Event,
    id:      e.id.clone(),
    title:   e.title.clone(),
    summary: e.summary.clone(),
    year:    Some(e.date.year),
    path:    format!("/events/{}", e.id),
  });
  let documents = corpus.documents().iter().map(|d| FeedItem {
    kind:    FeedKind::Document,
    id:      d.id.clone(),
    title:   d.title.clone(),
    summary: d.summary.clone(),
    year:    Some(d.year),
    path:    format!("/documents/{}", d.id),
  });
  let sources = corpus.sources().iter().map(|s| FeedItem {
    kind:    FeedKind::Source,
    id:      s.id.clone(),
    title:   s.title.clone(),
    summary: s.summary.clone(),
    year:    s.year,
    path:    format!("/sources/view/{}", s.id),
  });
  let quotes = corpus.quotes().iter().map(|q| {
    let who = corpus
      .figure(&q.figure_id)
      .map(|f| f.name.clone())
      .unwrap_or_else(|| q.figure_id.clone());
    FeedItem {
      kind:    FeedKind::Quote,
      id:      q.id.clone(),
      title:   who,
      summary: q.text.clone(),
      year:    q.year,
      path:    format!("/quotes/{}", q.id),
    }
  });

  events.chain(documents).chain(sources).chain(quotes).collect()
}

// ─── Ordering ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedOrder {
  /// Ascending by year; undated items last; ties keep input order.
  #[default]
  Chronological,
  /// A stable pseudo-random permutation determined by `seed`.
  Shuffled { seed: u64 },
}

impl FeedOrder {
  /// Parse the `order` query parameter, pairing `shuffled` with `seed`.
  pub fn parse(order: Option<&str>, seed: Option<u64>) -> Result<Self, Error> {
    match order.unwrap_or("chronological") {
      "shuffled" => Ok(Self::Shuffled { seed: seed.unwrap_or(0) }),
      other => other.parse(),
    }
  }
}

impl FromStr for FeedOrder {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "chronological" => Ok(Self::Chronological),
      "shuffled" => Ok(Self::Shuffled { seed: 0 }),
      other => Err(Error::UnknownFeedOrder(other.to_owned())),
    }
  }
}

/// Reorder `items` in place.
pub fn order_feed(items: &mut [FeedItem], order: FeedOrder) {
  match order {
    FeedOrder::Chronological => {
      items.sort_by_key(|i| (i.year.is_none(), i.year));
    }
    FeedOrder::Shuffled { seed } => {
      items.sort_by_cached_key(|i| shuffle_key(seed, i));
    }
  }
}

fn shuffle_key(seed: u64, item: &FeedItem) -> [u8; 32] {
  let mut hasher = Sha256::new();
  hasher.update(seed.to_le_bytes());
  hasher.update(item.kind.as_str().as_bytes());
  hasher.update([0]);
  hasher.update(item.id.as_bytes());
  hasher.finalize().into()
}

// ─── Paging ──────────────────────────────────────────────────────────────────

/// One page of the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
  pub items:       Vec<FeedItem>,
  pub offset:      usize,
  pub total:       usize,
  /// Offset of the following page; `None` once the end has been reached.
  pub next_offset: Option<usize>,
}

/// Cut one page out of an ordered feed. Offsets past the end give an empty
/// page; a zero `limit` is treated as one.
pub fn paginate(items: &[FeedItem], offset: usize, limit: usize) -> FeedPage {
  let limit = limit.max(1);
  let total = items.len();
  let start = offset.min(total);
  let end = start.saturating_add(limit).min(total);
  FeedPage {
    items: items[start..end].to_vec(),
    offset: start,
    total,
    next_offset: (end < total).then_some(end),
  }
}
