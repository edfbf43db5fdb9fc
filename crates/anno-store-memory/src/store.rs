//! [`MemoryCorpus`]: the in-memory implementation of [`Corpus`].

use std::{fmt, path::Path, sync::Arc};

use anno_core::{
  corpus::Corpus,
  model::{
    Category, CorpusData, Document, Era, Event, FederatedSource, Figure, Quote,
  },
};

use crate::{
  Result,
  index::Indexes,
  validate::{check_dates, check_eras, check_references},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A validated, indexed, read-only corpus.
///
/// Cloning is cheap: the data is reference-counted.
#[derive(Clone)]
pub struct MemoryCorpus {
  inner: Arc<Inner>,
}

struct Inner {
  data: CorpusData,
  idx:  Indexes,
}

impl MemoryCorpus {
  /// Read and validate a JSON corpus file.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let corpus = Self::from_json_str(&raw)?;
    let counts = corpus.counts();
    tracing::info!(
      path = %path.display(),
      eras = counts.eras,
      events = counts.events,
      figures = counts.figures,
      documents = counts.documents,
      categories = counts.categories,
      sources = counts.sources,
      quotes = counts.quotes,
      "corpus loaded"
    );
    Ok(corpus)
  }

  /// Parse and validate a JSON corpus.
  pub fn from_json_str(json: &str) -> Result<Self> {
    let data: CorpusData = serde_json::from_str(json)?;
    Self::from_data(data)
  }

  /// Validate already-decoded data and build the id indexes.
  ///
  /// Checks run in order (dates, era ranges, duplicate ids, references)
  /// and the first failure is returned.
  pub fn from_data(data: CorpusData) -> Result<Self> {
    check_dates(&data)?;
    check_eras(&data)?;
    let idx = Indexes::build(&data)?;
    check_references(&data, &idx)?;

    Ok(Self { inner: Arc::new(Inner { data, idx }) })
  }

  /// The underlying collections.
  pub fn data(&self) -> &CorpusData { &self.inner.data }

  pub fn counts(&self) -> Counts {
    let d = &self.inner.data;
    Counts {
      eras:       d.eras.len(),
      events:     d.events.len(),
      figures:    d.figures.len(),
      documents:  d.documents.len(),
      categories: d.categories.len(),
      sources:    d.sources.len(),
      quotes:     d.quotes.len(),
    }
  }
}

/// Records per collection, as reported when a corpus is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
  pub eras:       usize,
  pub events:     usize,
  pub figures:    usize,
  pub documents:  usize,
  pub categories: usize,
  pub sources:    usize,
  pub quotes:     usize,
}

impl fmt::Display for Counts {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} eras, {} events, {} figures, {} documents, {} categories, {} sources, {} quotes",
      self.eras,
      self.events,
      self.figures,
      self.documents,
      self.categories,
      self.sources,
      self.quotes,
    )
  }
}

fn lookup<'a, T>(
  index: &std::collections::HashMap<String, usize>,
  items: &'a [T],
  id: &str,
) -> Option<&'a T> {
  index.get(id).and_then(|&pos| items.get(pos))
}

impl Corpus for MemoryCorpus {
  fn eras(&self) -> &[Era] { &self.inner.data.eras }

  fn events(&self) -> &[Event] { &self.inner.data.events }

  fn figures(&self) -> &[Figure] { &self.inner.data.figures }

  fn documents(&self) -> &[Document] { &self.inner.data.documents }

  fn categories(&self) -> &[Category] { &self.inner.data.categories }

  fn sources(&self) -> &[FederatedSource] { &self.inner.data.sources }

  fn quotes(&self) -> &[Quote] { &self.inner.data.quotes }

  // ── Indexed lookups ───────────────────────────────────────────────────

  fn era(&self, id: &str) -> Option<&Era> {
    lookup(&self.inner.idx.eras, self.eras(), id)
  }

  fn event(&self, id: &str) -> Option<&Event> {
    lookup(&self.inner.idx.events, self.events(), id)
  }

  fn figure(&self, id: &str) -> Option<&Figure> {
    lookup(&self.inner.idx.figures, self.figures(), id)
  }

  fn document(&self, id: &str) -> Option<&Document> {
    lookup(&self.inner.idx.documents, self.documents(), id)
  }

  fn category(&self, id: &str) -> Option<&Category> {
    lookup(&self.inner.idx.categories, self.categories(), id)
  }

  fn source(&self, id: &str) -> Option<&FederatedSource> {
    lookup(&self.inner.idx.sources, self.sources(), id)
  }

  fn quote(&self, id: &str) -> Option<&Quote> {
    lookup(&self.inner.idx.quotes, self.quotes(), id)
  }
}
