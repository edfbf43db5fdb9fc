//! Load-time checks. A corpus that passes these never produces a dangling
//! lookup at render time.

use std::collections::HashMap;

use anno_core::{date::HistDate, model::CorpusData};

use crate::{Error, Result, index::Indexes};

pub(crate) fn check_dates(data: &CorpusData) -> Result<()> {
  for e in &data.events {
    check_date("event", &e.id, "date", &e.date)?;
  }
  for f in &data.figures {
    if let Some(born) = &f.born {
      check_date("figure", &f.id, "born", born)?;
    }
    if let Some(died) = &f.died {
      check_date("figure", &f.id, "died", died)?;
    }
  }
  Ok(())
}

fn check_date(
  kind: &'static str,
  id: &str,
  field: &'static str,
  date: &HistDate,
) -> Result<()> {
  date.check().map_err(|reason| Error::InvalidDate {
    kind,
    id: id.to_owned(),
    field,
    reason,
  })
}

pub(crate) fn check_eras(data: &CorpusData) -> Result<()> {
  match data.eras.iter().find(|e| e.start_year > e.end_year) {
    Some(era) => Err(Error::InvalidEra(era.id.clone())),
    None => Ok(()),
  }
}

// ─── References ──────────────────────────────────────────────────────────────

/// Every cross-reference must resolve through `idx`.
pub(crate) fn check_references(data: &CorpusData, idx: &Indexes) -> Result<()> {
  for e in &data.events {
    exists(&idx.eras, "event", &e.id, "era_id", "era", &e.era_id)?;
    for f in &e.figure_ids {
      exists(&idx.figures, "event", &e.id, "figure_ids", "figure", f)?;
    }
  }

  for f in &data.figures {
    exists(&idx.eras, "figure", &f.id, "era_id", "era", &f.era_id)?;
  }

  for d in &data.documents {
    exists(&idx.eras, "document", &d.id, "era_id", "era", &d.era_id)?;
    if let Some(author) = &d.author_id {
      exists(&idx.figures, "document", &d.id, "author_id", "figure", author)?;
    }
  }

  for s in &data.sources {
    exists(
      &idx.categories,
      "source",
      &s.id,
      "category_id",
      "category",
      &s.category_id,
    )?;
    if let Some(era) = &s.era_id {
      exists(&idx.eras, "source", &s.id, "era_id", "era", era)?;
    }
  }

  for q in &data.quotes {
    exists(&idx.figures, "quote", &q.id, "figure_id", "figure", &q.figure_id)?;
    if let Some(doc) = &q.document_id {
      exists(&idx.documents, "quote", &q.id, "document_id", "document", doc)?;
    }
  }

  Ok(())
}

fn exists(
  index: &HashMap<String, usize>,
  kind: &'static str,
  id: &str,
  field: &'static str,
  target: &'static str,
  wanted: &str,
) -> Result<()> {
  if index.contains_key(wanted) {
    Ok(())
  } else {
    Err(Error::DanglingReference {
      kind,
      id: id.to_owned(),
      field,
      target,
      missing: wanted.to_owned(),
    })
  }
}
