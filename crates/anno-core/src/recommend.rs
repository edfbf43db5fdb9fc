//! "What to read": ranks documents by a fixed rubric of small integer
//! weights: shorter, older and more foundational texts score higher.
//!
//! Ranking is a stable sort on the summed score, so ties keep input order and
//! repeated calls over the same input give the same result.

use serde::Serialize;

use crate::model::Document;

/// Keyword weights, checked against the document's kind and title. Only the
/// highest matching weight counts.
const KEYWORDS: &[(&str, u32)] = &[
  ("creed", 3),
  ("confession", 3),
  ("catechism", 3),
  ("letter", 2),
  ("epistle", 2),
  ("sermon", 2),
  ("homily", 2),
  ("rule", 1),
  ("treatise", 1),
  ("apology", 1),
];

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
  pub document: &'a Document,
  pub score:    u32,
}

/// Score a single document.
pub fn score(doc: &Document) -> u32 {
  length_weight(doc.word_count) + age_weight(doc.year) + keyword_weight(doc)
}

fn length_weight(word_count: Option<u32>) -> u32 {
  match word_count {
    None => 0,
    Some(0..=3_000) => 3,
    Some(3_001..=15_000) => 2,
    Some(_) => 1,
  }
}

fn age_weight(year: i32) -> u32 {
  match year {
    ..500 => 3,
    500..1500 => 2,
    _ => 1,
  }
}

fn keyword_weight(doc: &Document) -> u32 {
  let haystack = format!("{} {}", doc.kind, doc.title).to_lowercase();
  KEYWORDS
    .iter()
    .filter(|(kw, _)| haystack.contains(kw))
    .map(|(_, w)| *w)
    .max()
    .unwrap_or(0)
}

/// Rank `docs` by descending score and keep the first `limit`.
pub fn recommend<'a, I>(docs: I, limit: usize) -> Vec<Recommendation<'a>>
where
  I: IntoIterator<Item = &'a Document>,
{
  let mut ranked: Vec<Recommendation<'a>> = docs
    .into_iter()
    .map(|document| Recommendation { document, score: score(document) })
    .collect();
  ranked.sort_by(|a, b| b.score.cmp(&a.score));
  ranked.truncate(limit);
  ranked
}
