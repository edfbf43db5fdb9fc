//! The collections the browser shows, flattened into displayable entries.

use std::collections::HashMap;

use anno_core::{
  date::year_label,
  model::{Document, Event, Figure, Quote},
};

/// Everything fetched from the API at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  pub figures:   Vec<Figure>,
  pub events:    Vec<Event>,
  pub documents: Vec<Document>,
  pub quotes:    Vec<Quote>,
}

/// One row of the list pane plus what the detail pane shows for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  pub id:     String,
  pub title:  String,
  /// Dimmed suffix in the list: years, genre.
  pub meta:   String,
  pub fields: Vec<(&'static str, String)>,
  pub text:   String,
}

impl Catalog {
  fn names(&self) -> HashMap<&str, &str> {
    self
      .figures
      .iter()
      .map(|f| (f.id.as_str(), f.name.as_str()))
      .collect()
  }

  pub fn figure_entries(&self) -> Vec<Entry> {
    self
      .figures
      .iter()
      .map(|f| {
        let mut fields = Vec::new();
        if let Some(title) = &f.title {
          fields.push(("title", title.clone()));
        }
        if let Some(born) = &f.born {
          fields.push(("born", born.to_string()));
        }
        if let Some(died) = &f.died {
          fields.push(("died", died.to_string()));
        }
        if let Some(tradition) = &f.tradition {
          fields.push(("tradition", tradition.clone()));
        }
        fields.push(("era", f.era_id.clone()));
        Entry {
          id: f.id.clone(),
          title: f.name.clone(),
          meta: f.lifespan(),
          fields,
          text: f.summary.clone(),
        }
      })
      .collect()
  }

  pub fn event_entries(&self) -> Vec<Entry> {
    let names = self.names();
    self
      .events
      .iter()
      .map(|e| {
        let mut fields = vec![("date", e.date.to_string())];
        if let Some(place) = &e.location {
          fields.push(("place", place.clone()));
        }
        fields.push(("era", e.era_id.clone()));
        if !e.figure_ids.is_empty() {
          let people: Vec<&str> = e
            .figure_ids
            .iter()
            .map(|id| names.get(id.as_str()).copied().unwrap_or(id.as_str()))
            .collect();
          fields.push(("figures", people.join(", ")));
        }
        Entry {
          id: e.id.clone(),
          title: e.title.clone(),
          meta: year_label(e.date.year),
          fields,
          text: e.summary.clone(),
        }
      })
      .collect()
  }

  pub fn document_entries(&self) -> Vec<Entry> {
    let names = self.names();
    self
      .documents
      .iter()
      .map(|d| {
        let mut fields = vec![("kind", d.kind.clone())];
        if let Some(author) = &d.author_id {
          let name = names.get(author.as_str()).copied().unwrap_or(author.as_str());
          fields.push(("author", name.to_string()));
        }
        fields.push(("year", year_label(d.year)));
        if let Some(words) = d.word_count {
          fields.push(("words", words.to_string()));
        }
        if let Some(url) = &d.url {
          fields.push(("url", url.clone()));
        }
        Entry {
          id: d.id.clone(),
          title: d.title.clone(),
          meta: format!("{}, {}", d.kind, year_label(d.year)),
          fields,
          text: d.summary.clone(),
        }
      })
      .collect()
  }

  pub fn quote_entries(&self) -> Vec<Entry> {
    let names = self.names();
    self
      .quotes
      .iter()
      .map(|q| {
        let who = names
          .get(q.figure_id.as_str())
          .copied()
          .unwrap_or(q.figure_id.as_str());
        let mut fields = vec![("by", who.to_string())];
        if let Some(doc) = &q.document_id {
          fields.push(("from", doc.clone()));
        }
        if let Some(year) = q.year {
          fields.push(("year", year_label(year)));
        }
        if !q.topics.is_empty() {
          fields.push(("topics", q.topics.join(", ")));
        }
        Entry {
          id: q.id.clone(),
          title: q.text.clone(),
          meta: who.to_string(),
          fields,
          text: String::new(),
        }
      })
      .collect()
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use anno_core::date::HistDate;

  use super::*;

  pub(crate) fn sample() -> Catalog {
    let figure = |id: &str, name: &str, born: i32, died: i32| Figure {
      id:        id.into(),
      name:      name.into(),
      title:     None,
      born:      Some(HistDate::year(born)),
      died:      Some(HistDate::year(died)),
      era_id:    "era".into(),
      tradition: None,
      summary:   format!("About {name}."),
    };
    let event = |id: &str, title: &str, year: i32, figures: &[&str]| Event {
      id:         id.into(),
      title:      title.into(),
      date:       HistDate::year(year),
      era_id:     "era".into(),
      figure_ids: figures.iter().map(|f| f.to_string()).collect(),
      location:   None,
      summary:    String::new(),
    };
    Catalog {
      figures:   vec![
        figure("augustine", "Augustine of Hippo", 354, 430),
        figure("athanasius", "Athanasius of Alexandria", 296, 373),
        figure("luther", "Martin Luther", 1483, 1546),
      ],
      events:    vec![
        event("nicaea", "Council of Nicaea", 325, &["athanasius"]),
        event("worms", "Diet of Worms", 1521, &["luther"]),
      ],
      documents: vec![Document {
        id:         "confessions".into(),
        title:      "Confessions".into(),
        author_id:  Some("augustine".into()),
        year:       400,
        era_id:     "era".into(),
        kind:       "autobiography".into(),
        word_count: Some(110_000),
        summary:    String::new(),
        url:        None,
      }],
      quotes:    vec![Quote {
        id:          "here-i-stand".into(),
        text:        "Here I stand.".into(),
        figure_id:   "luther".into(),
        document_id: None,
        year:        Some(1521),
        topics:      vec!["conscience".into()],
      }],
    }
  }

  #[test]
  fn events_name_their_figures() {
    let entries = sample().event_entries();
    assert_eq!(entries[0].meta, "325");
    assert!(entries[0].fields.contains(&("figures", "Athanasius of Alexandria".into())));
  }

  #[test]
  fn documents_resolve_authors() {
    let entries = sample().document_entries();
    assert_eq!(entries[0].meta, "autobiography, 400");
    assert!(entries[0].fields.contains(&("author", "Augustine of Hippo".into())));
  }

  #[test]
  fn quotes_are_attributed() {
    let entries = sample().quote_entries();
    assert_eq!(entries[0].meta, "Martin Luther");
    assert!(entries[0].fields.contains(&("topics", "conscience".into())));
  }
}
