//! Id → position indexes over each collection.

use std::collections::HashMap;

use anno_core::model::CorpusData;

use crate::{Error, Result};

#[derive(Debug, Default)]
pub(crate) struct Indexes {
  pub eras:       HashMap<String, usize>,
  pub events:     HashMap<String, usize>,
  pub figures:    HashMap<String, usize>,
  pub documents:  HashMap<String, usize>,
  pub categories: HashMap<String, usize>,
  pub sources:    HashMap<String, usize>,
  pub quotes:     HashMap<String, usize>,
}

impl Indexes {
  /// Build all indexes, failing on the first duplicate id.
  pub fn build(data: &CorpusData) -> Result<Self> {
    Ok(Self {
      eras:       index("era", data.eras.iter().map(|r| r.id.as_str()))?,
      events:     index("event", data.events.iter().map(|r| r.id.as_str()))?,
      figures:    index("figure", data.figures.iter().map(|r| r.id.as_str()))?,
      documents:  index(
        "document",
        data.documents.iter().map(|r| r.id.as_str()),
      )?,
      categories: index(
        "category",
        data.categories.iter().map(|r| r.id.as_str()),
      )?,
      sources:    index("source", data.sources.iter().map(|r| r.id.as_str()))?,
      quotes:     index("quote", data.quotes.iter().map(|r| r.id.as_str()))?,
    })
  }
}

fn index<'a>(
  kind: &'static str,
  ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>> {
  let mut map = HashMap::new();
  for (pos, id) in ids.enumerate() {
    if map.insert(id.to_owned(), pos).is_some() {
      return Err(Error::DuplicateId { kind, id: id.to_owned() });
    }
  }
  Ok(map)
}
