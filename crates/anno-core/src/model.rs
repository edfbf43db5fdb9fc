//! Domain records of the read-only reference corpus.
//!
//! Records are created once when the corpus is loaded and never mutated.
//! Cross-references are plain string ids; the loader guarantees that every
//! referenced id exists.

use serde::{Deserialize, Serialize};

use crate::date::HistDate;

/// A named historical period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Era {
  pub id:         String,
  pub name:       String,
  pub start_year: i32,
  pub end_year:   i32,
  pub summary:    String,
}

impl Era {
  pub fn contains_year(&self, year: i32) -> bool {
    (self.start_year..=self.end_year).contains(&year)
  }
}

/// Something that happened, at a known (possibly imprecise) date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub id:         String,
  pub title:      String,
  pub date:       HistDate,
  pub era_id:     String,
  /// Figures who took part, in display order.
  #[serde(default)]
  pub figure_ids: Vec<String>,
  #[serde(default)]
  pub location:   Option<String>,
  pub summary:    String,
}

/// A person: theologian, bishop, reformer, missionary, martyr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
  pub id:        String,
  pub name:      String,
  /// Honorific or role, e.g. "Bishop of Hippo".
  #[serde(default)]
  pub title:     Option<String>,
  #[serde(default)]
  pub born:      Option<HistDate>,
  #[serde(default)]
  pub died:      Option<HistDate>,
  pub era_id:    String,
  #[serde(default)]
  pub tradition: Option<String>,
  pub summary:   String,
}

impl Figure {
  /// `"354–430"`, `"b. 1090"`, or empty when neither date is known.
  pub fn lifespan(&self) -> String {
    let born = self.born.map(|d| crate::date::year_label(d.year));
    let died = self.died.map(|d| crate::date::year_label(d.year));
    match (born, died) {
      (Some(b), Some(d)) => format!("{b}–{d}"),
      (Some(b), None) => format!("b. {b}"),
      (None, Some(d)) => format!("d. {d}"),
      (None, None) => String::new(),
    }
  }
}

/// A primary-source text: creed, letter, sermon, treatise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  pub id:         String,
  pub title:      String,
  #[serde(default)]
  pub author_id:  Option<String>,
  pub year:       i32,
  pub era_id:     String,
  /// Free-form genre, e.g. `"creed"`, `"letter"`, `"treatise"`.
  pub kind:       String,
  #[serde(default)]
  pub word_count: Option<u32>,
  pub summary:    String,
  #[serde(default)]
  pub url:        Option<String>,
}

/// A grouping for federated sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:          String,
  pub name:        String,
  pub description: String,
}

/// An externally hosted document or archive, tracked by metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedSource {
  pub id:          String,
  pub title:       String,
  pub url:         String,
  pub category_id: String,
  #[serde(default)]
  pub topics:      Vec<String>,
  #[serde(default)]
  pub publisher:   Option<String>,
  #[serde(default)]
  pub era_id:      Option<String>,
  #[serde(default)]
  pub year:        Option<i32>,
  pub summary:     String,
}

/// A short quotation attributed to a figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
  pub id:          String,
  pub text:        String,
  pub figure_id:   String,
  #[serde(default)]
  pub document_id: Option<String>,
  #[serde(default)]
  pub year:        Option<i32>,
  #[serde(default)]
  pub topics:      Vec<String>,
}

/// The whole corpus as it is stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusData {
  #[serde(default)]
  pub eras:       Vec<Era>,
  #[serde(default)]
  pub events:     Vec<Event>,
  #[serde(default)]
  pub figures:    Vec<Figure>,
  #[serde(default)]
  pub documents:  Vec<Document>,
  #[serde(default)]
  pub categories: Vec<Category>,
  #[serde(default)]
  pub sources:    Vec<FederatedSource>,
  #[serde(default)]
  pub quotes:     Vec<Quote>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn figure_deserializes_with_optional_fields_missing() {
    let json = r#"{
      "id": "polycarp",
      "name": "Polycarp of Smyrna",
      "era_id": "apostolic",
      "summary": "Bishop and martyr."
    }"#;
    let figure: Figure = serde_json::from_str(json).unwrap();
    assert_eq!(figure.id, "polycarp");
    assert!(figure.born.is_none());
    assert!(figure.title.is_none());
    assert_eq!(figure.lifespan(), "");
  }

  #[test]
  fn lifespan_formats() {
    let mut f = Figure {
      id:        "augustine".into(),
      name:      "Augustine".into(),
      title:     None,
      born:      Some(HistDate::ymd(354, 11, 13)),
      died:      Some(HistDate::ymd(430, 8, 28)),
      era_id:    "nicene".into(),
      tradition: None,
      summary:   String::new(),
    };
    assert_eq!(f.lifespan(), "354–430");
    f.died = None;
    assert_eq!(f.lifespan(), "b. 354");
  }

  #[test]
  fn era_contains_is_inclusive() {
    let era = Era {
      id:         "nicene".into(),
      name:       "Nicene".into(),
      start_year: 313,
      end_year:   451,
      summary:    String::new(),
    };
    assert!(era.contains_year(313));
    assert!(era.contains_year(451));
    assert!(!era.contains_year(452));
  }
}
