//! The `Corpus` trait, the data provider every page and endpoint reads from.
//!
//! A backend only has to hand out the seven collections as slices. Lookups
//! and filters have default implementations as linear scans over those
//! slices; backends may override the by-id lookups with indexes
//! (`anno-store-memory` does).
//!
//! Filters preserve collection order unless documented otherwise. An empty
//! result is never an error.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
  date::{DayOfYear, century_of},
  model::{
    Category, CorpusData, Document, Era, Event, FederatedSource, Figure, Quote,
  },
};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Parameters for [`Corpus::query_events`]. All filters are conjunctive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
  pub era_id:    Option<String>,
  /// See [`century_of`](crate::date::century_of) for numbering.
  pub century:   Option<i32>,
  /// Only events this figure took part in.
  pub figure_id: Option<String>,
  /// Inclusive lower bound on the event year.
  pub year_from: Option<i32>,
  /// Inclusive upper bound on the event year.
  pub year_to:   Option<i32>,
}

impl EventQuery {
  pub fn matches(&self, event: &Event) -> bool {
    let year = event.date.year;
    self.era_id.as_deref().is_none_or(|id| event.era_id == id)
      && self.century.is_none_or(|c| century_of(year) == c)
      && self
        .figure_id
        .as_deref()
        .is_none_or(|id| event.figure_ids.iter().any(|f| f == id))
      && self.year_from.is_none_or(|from| year >= from)
      && self.year_to.is_none_or(|to| year <= to)
  }
}

/// Everything that matched a free-text search, grouped by collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults<'a> {
  pub eras:      Vec<&'a Era>,
  pub events:    Vec<&'a Event>,
  pub figures:   Vec<&'a Figure>,
  pub documents: Vec<&'a Document>,
  pub sources:   Vec<&'a FederatedSource>,
  pub quotes:    Vec<&'a Quote>,
}

impl SearchResults<'_> {
  pub fn total(&self) -> usize {
    self.eras.len()
      + self.events.len()
      + self.figures.len()
      + self.documents.len()
      + self.sources.len()
      + self.quotes.len()
  }

  pub fn is_empty(&self) -> bool { self.total() == 0 }
}

/// Events, births and deaths that fall on one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct OnThisDay<'a> {
  pub day:    DayOfYear,
  pub events: Vec<&'a Event>,
  pub births: Vec<&'a Figure>,
  pub deaths: Vec<&'a Figure>,
}

impl OnThisDay<'_> {
  pub fn is_empty(&self) -> bool {
    self.events.is_empty() && self.births.is_empty() && self.deaths.is_empty()
  }
}

// ─── Labels ──────────────────────────────────────────────────────────────────

/// Whether two genre or topic labels name the same thing. Folds case the same
/// way the label listings do, so every listed label matches its own records.
pub fn same_label(a: &str, b: &str) -> bool {
  a == b || a.to_lowercase() == b.to_lowercase()
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Read-only access to the reference corpus.
pub trait Corpus: Send + Sync {
  fn eras(&self) -> &[Era];
  fn events(&self) -> &[Event];
  fn figures(&self) -> &[Figure];
  fn documents(&self) -> &[Document];
  fn categories(&self) -> &[Category];
  fn sources(&self) -> &[FederatedSource];
  fn quotes(&self) -> &[Quote];

  // ── By id ─────────────────────────────────────────────────────────────

  fn era(&self, id: &str) -> Option<&Era> {
    self.eras().iter().find(|r| r.id == id)
  }

  fn event(&self, id: &str) -> Option<&Event> {
    self.events().iter().find(|r| r.id == id)
  }

  fn figure(&self, id: &str) -> Option<&Figure> {
    self.figures().iter().find(|r| r.id == id)
  }

  fn document(&self, id: &str) -> Option<&Document> {
    self.documents().iter().find(|r| r.id == id)
  }

  fn category(&self, id: &str) -> Option<&Category> {
    self.categories().iter().find(|r| r.id == id)
  }

  fn source(&self, id: &str) -> Option<&FederatedSource> {
    self.sources().iter().find(|r| r.id == id)
  }

  fn quote(&self, id: &str) -> Option<&Quote> {
    self.quotes().iter().find(|r| r.id == id)
  }

  // ── Eras ──────────────────────────────────────────────────────────────

  /// The first era whose range contains `year`.
  fn era_for_year(&self, year: i32) -> Option<&Era> {
    self.eras().iter().find(|e| e.contains_year(year))
  }

  // ── Events ────────────────────────────────────────────────────────────

  fn events_in_era(&self, era_id: &str) -> Vec<&Event> {
    self.events().iter().filter(|e| e.era_id == era_id).collect()
  }

  /// Events matching `query`, sorted chronologically. Ties keep collection
  /// order.
  fn query_events(&self, query: &EventQuery) -> Vec<&Event> {
    let mut events: Vec<&Event> =
      self.events().iter().filter(|e| query.matches(e)).collect();
    events.sort_by_key(|e| e.date);
    events
  }

  /// All events, sorted chronologically.
  fn timeline(&self) -> Vec<&Event> {
    self.query_events(&EventQuery::default())
  }

  fn events_for_figure(&self, figure_id: &str) -> Vec<&Event> {
    self.query_events(&EventQuery {
      figure_id: Some(figure_id.to_owned()),
      ..EventQuery::default()
    })
  }

  fn events_on_day(&self, day: DayOfYear) -> Vec<&Event> {
    self.events().iter().filter(|e| day.matches(&e.date)).collect()
  }

  // ── Figures ───────────────────────────────────────────────────────────

  fn figures_in_era(&self, era_id: &str) -> Vec<&Figure> {
    self.figures().iter().filter(|f| f.era_id == era_id).collect()
  }

  fn figures_born_on(&self, day: DayOfYear) -> Vec<&Figure> {
    self
      .figures()
      .iter()
      .filter(|f| f.born.is_some_and(|d| day.matches(&d)))
      .collect()
  }

  fn figures_died_on(&self, day: DayOfYear) -> Vec<&Figure> {
    self
      .figures()
      .iter()
      .filter(|f| f.died.is_some_and(|d| day.matches(&d)))
      .collect()
  }

  /// Figures who took part in `event`, in the event's order.
  fn figures_for_event(&self, event: &Event) -> Vec<&Figure> {
    event
      .figure_ids
      .iter()
      .filter_map(|id| self.figure(id))
      .collect()
  }

  // ── Documents ─────────────────────────────────────────────────────────

  fn documents_in_era(&self, era_id: &str) -> Vec<&Document> {
    self.documents().iter().filter(|d| d.era_id == era_id).collect()
  }

  fn documents_by_author(&self, figure_id: &str) -> Vec<&Document> {
    self
      .documents()
      .iter()
      .filter(|d| d.author_id.as_deref() == Some(figure_id))
      .collect()
  }

  /// Documents of one genre, compared case-insensitively.
  fn documents_of_kind(&self, kind: &str) -> Vec<&Document> {
    self
      .documents()
      .iter()
      .filter(|d| same_label(&d.kind, kind))
      .collect()
  }

  /// Distinct document genres, lowercased and sorted.
  fn document_kinds(&self) -> Vec<String> {
    self
      .documents()
      .iter()
      .map(|d| d.kind.to_lowercase())
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect()
  }

  // ── Sources ───────────────────────────────────────────────────────────

  fn sources_in_category(&self, category_id: &str) -> Vec<&FederatedSource> {
    self
      .sources()
      .iter()
      .filter(|s| s.category_id == category_id)
      .collect()
  }

  fn sources_with_topic(&self, topic: &str) -> Vec<&FederatedSource> {
    self
      .sources()
      .iter()
      .filter(|s| s.topics.iter().any(|t| same_label(t, topic)))
      .collect()
  }

  /// Distinct source topics, lowercased and sorted.
  fn source_topics(&self) -> Vec<String> {
    self
      .sources()
      .iter()
      .flat_map(|s| s.topics.iter().map(|t| t.to_lowercase()))
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect()
  }

  // ── Quotes ────────────────────────────────────────────────────────────

  fn quotes_by_figure(&self, figure_id: &str) -> Vec<&Quote> {
    self.quotes().iter().filter(|q| q.figure_id == figure_id).collect()
  }

  fn quotes_from_document(&self, document_id: &str) -> Vec<&Quote> {
    self
      .quotes()
      .iter()
      .filter(|q| q.document_id.as_deref() == Some(document_id))
      .collect()
  }

  fn quotes_with_topic(&self, topic: &str) -> Vec<&Quote> {
    self
      .quotes()
      .iter()
      .filter(|q| q.topics.iter().any(|t| same_label(t, topic)))
      .collect()
  }

  /// Distinct quote topics, lowercased and sorted.
  fn quote_topics(&self) -> Vec<String> {
    self
      .quotes()
      .iter()
      .flat_map(|q| q.topics.iter().map(|t| t.to_lowercase()))
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect()
  }

  // ── Cross-collection ──────────────────────────────────────────────────

  /// Case-insensitive substring search over names, titles, summaries and
  /// quote text. Blank input matches nothing.
  fn search(&self, text: &str) -> SearchResults<'_> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
      return SearchResults::default();
    }
    let hit = |fields: &[&str]| {
      fields.iter().any(|f| f.to_lowercase().contains(&needle))
    };

    SearchResults {
      eras:      self
        .eras()
        .iter()
        .filter(|e| hit(&[e.name.as_str(), e.summary.as_str()]))
        .collect(),
      events:    self
        .events()
        .iter()
        .filter(|e| {
          hit(&[
            e.title.as_str(),
            e.summary.as_str(),
            e.location.as_deref().unwrap_or(""),
          ])
        })
        .collect(),
      figures:   self
        .figures()
        .iter()
        .filter(|f| {
          hit(&[
            f.name.as_str(),
            f.summary.as_str(),
            f.title.as_deref().unwrap_or(""),
          ])
        })
        .collect(),
      documents: self
        .documents()
        .iter()
        .filter(|d| hit(&[d.title.as_str(), d.summary.as_str()]))
        .collect(),
      sources:   self
        .sources()
        .iter()
        .filter(|s| hit(&[s.title.as_str(), s.summary.as_str()]))
        .collect(),
      quotes:    self.quotes().iter().filter(|q| hit(&[q.text.as_str()])).collect(),
    }
  }

  fn on_this_day(&self, day: DayOfYear) -> OnThisDay<'_> {
    OnThisDay {
      day,
      events: self.events_on_day(day),
      births: self.figures_born_on(day),
      deaths: self.figures_died_on(day),
    }
  }
}

/// Raw, unvalidated data can be queried directly; lookups fall back to the
/// linear-scan defaults.
impl Corpus for CorpusData {
  fn eras(&self) -> &[Era] { &self.eras }

  fn events(&self) -> &[Event] { &self.events }

  fn figures(&self) -> &[Figure] { &self.figures }

  fn documents(&self) -> &[Document] { &self.documents }

  fn categories(&self) -> &[Category] { &self.categories }

  fn sources(&self) -> &[FederatedSource] { &self.sources }

  fn quotes(&self) -> &[Quote] { &self.quotes }
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use crate::date::HistDate;

  pub(crate) fn era(id: &str, start: i32, end: i32) -> Era {
    Era {
      id:         id.into(),
      name:       format!("{id} era"),
      start_year: start,
      end_year:   end,
      summary:    String::new(),
    }
  }

  pub(crate) fn event(id: &str, date: HistDate, era_id: &str, figures: &[&str]) -> Event {
    Event {
      id:         id.into(),
      title:      format!("Event {id}"),
      date,
      era_id:     era_id.into(),
      figure_ids: figures.iter().map(|s| s.to_string()).collect(),
      location:   None,
      summary:    String::new(),
    }
  }

  pub(crate) fn figure(id: &str, born: Option<HistDate>, era_id: &str) -> Figure {
    Figure {
      id:        id.into(),
      name:      format!("Figure {id}"),
      title:     None,
      born,
      died:      None,
      era_id:    era_id.into(),
      tradition: None,
      summary:   String::new(),
    }
  }

  pub(crate) fn document(id: &str, year: i32, kind: &str, words: Option<u32>) -> Document {
    Document {
      id:         id.into(),
      title:      format!("Document {id}"),
      author_id:  None,
      year,
      era_id:     "early".into(),
      kind:       kind.into(),
      word_count: words,
      summary:    String::new(),
      url:        None,
    }
  }

  pub(crate) fn sample() -> CorpusData {
    CorpusData {
      eras: vec![era("early", 30, 312), era("nicene", 313, 451)],
      events: vec![
        event("nicaea", HistDate::ymd(325, 5, 20), "nicene", &["athanasius"]),
        event("pentecost", HistDate::year(33), "early", &[]),
        event("milan", HistDate::year(313), "nicene", &[]),
        event("smyrna", HistDate::ymd(155, 2, 23), "early", &["polycarp"]),
      ],
      figures: vec![
        figure("athanasius", Some(HistDate::year(296)), "nicene"),
        figure("polycarp", Some(HistDate::ymd(69, 2, 23)), "early"),
      ],
      documents: vec![
        document("didache", 100, "manual", Some(2_300)),
        document("creed", 325, "Creed", Some(200)),
      ],
      ..CorpusData::default()
    }
  }

  #[test]
  fn events_in_era_returns_only_matching() {
    let c = sample();
    let early = c.events_in_era("early");
    assert_eq!(early.len(), 2);
    assert!(early.iter().all(|e| e.era_id == "early"));
    assert!(c.events_in_era("missing").is_empty());
  }

  #[test]
  fn timeline_is_chronological() {
    let c = sample();
    let ids: Vec<&str> = c.timeline().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["pentecost", "smyrna", "milan", "nicaea"]);
  }

  #[test]
  fn query_by_century_and_figure() {
    let c = sample();
    let fourth = c.query_events(&EventQuery {
      century: Some(4),
      ..EventQuery::default()
    });
    assert_eq!(fourth.len(), 2);

    let with_polycarp = c.events_for_figure("polycarp");
    assert_eq!(with_polycarp.len(), 1);
    assert_eq!(with_polycarp[0].id, "smyrna");
  }

  #[test]
  fn query_by_year_range_is_inclusive() {
    let c = sample();
    let hits = c.query_events(&EventQuery {
      year_from: Some(155),
      year_to: Some(313),
      ..EventQuery::default()
    });
    let ids: Vec<&str> = hits.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["smyrna", "milan"]);
  }

  #[test]
  fn on_this_day_collects_events_and_births() {
    let c = sample();
    let day = DayOfYear::new(2, 23).unwrap();
    let otd = c.on_this_day(day);
    assert_eq!(otd.events.len(), 1);
    assert_eq!(otd.births.len(), 1);
    assert!(otd.deaths.is_empty());
    assert!(c.on_this_day(DayOfYear::new(1, 1).unwrap()).is_empty());
  }

  #[test]
  fn lookups_by_id() {
    let c = sample();
    assert!(c.era("nicene").is_some());
    assert!(c.event("nope").is_none());
    assert_eq!(c.era_for_year(320).map(|e| e.id.as_str()), Some("nicene"));
    assert!(c.era_for_year(2000).is_none());
  }

  #[test]
  fn document_kinds_are_case_folded() {
    let c = sample();
    assert_eq!(c.document_kinds(), ["creed", "manual"]);
    assert_eq!(c.documents_of_kind("CREED").len(), 1);
  }

  #[test]
  fn every_listed_kind_matches_its_documents() {
    let mut data = sample();
    data.documents.push(document("ad-diognetum", 150, "Épître", Some(4_000)));
    data.documents.push(document("ad-smyrnaeos", 110, "ÉPÎTRE", None));
    assert_eq!(data.document_kinds(), ["creed", "manual", "épître"]);
    for kind in data.document_kinds() {
      assert!(!data.documents_of_kind(&kind).is_empty(), "{kind}");
    }
    assert_eq!(data.documents_of_kind("épître").len(), 2);
  }

  #[test]
  fn non_ascii_topics_round_trip() {
    let mut data = sample();
    data.quotes.push(Quote {
      id:          "q".into(),
      text:        "Ubi caritas".into(),
      figure_id:   "athanasius".into(),
      document_id: None,
      year:        None,
      topics:      vec!["Charité".into()],
    });
    data.sources.push(FederatedSource {
      id:          "s".into(),
      title:       "Archive".into(),
      url:         "https://example.org".into(),
      category_id: "archives".into(),
      topics:      vec!["Œcuménisme".into()],
      publisher:   None,
      era_id:      None,
      year:        None,
      summary:     String::new(),
    });
    assert_eq!(data.quote_topics(), ["charité"]);
    assert_eq!(data.quotes_with_topic("charité").len(), 1);
    assert_eq!(data.source_topics(), ["œcuménisme"]);
    assert_eq!(data.sources_with_topic("œcuménisme").len(), 1);
  }

  #[test]
  fn same_label_folds_unicode_case() {
    assert!(same_label("Épître", "épître"));
    assert!(same_label("creed", "CREED"));
    assert!(!same_label("creed", "creeds"));
  }

  #[test]
  fn search_is_case_insensitive_and_ignores_blank() {
    let c = sample();
    let r = c.search("NICAEA");
    assert_eq!(r.events.len(), 1);
    assert!(c.search("   ").is_empty());
    assert_eq!(c.search("figure polycarp").figures.len(), 1);
  }
}
