//! Handlers for `/documents` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/documents` | Optional `era`, `kind`, `author` |
//! | `GET`  | `/documents/recommended` | Ranked "what to read"; optional `limit` (default 5) |
//! | `GET`  | `/documents/:id` | 404 if not found |

use std::sync::Arc;

use anno_core::{
  corpus::{Corpus, same_label},
  model::Document,
  recommend::recommend,
};
use axum::{
  Json,
  extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, found};

const DEFAULT_RECOMMENDED: usize = 5;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub era:    Option<String>,
  /// Genre, compared case-insensitively.
  pub kind:   Option<String>,
  pub author: Option<String>,
}

/// `GET /documents[?era=..][&kind=..][&author=..]`
pub async fn list<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Document>>, ApiError> {
  let Query(params) = query?;
  let docs = corpus
    .documents()
    .iter()
    .filter(|d| params.era.as_deref().is_none_or(|e| d.era_id == e))
    .filter(|d| {
      params
        .kind
        .as_deref()
        .is_none_or(|k| same_label(&d.kind, k))
    })
    .filter(|d| {
      params
        .author
        .as_deref()
        .is_none_or(|a| d.author_id.as_deref() == Some(a))
    })
    .cloned()
    .collect();
  Ok(Json(docs))
}

// ─── Recommended ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendedParams {
  pub limit: Option<usize>,
}

/// A document together with its "what to read" score.
#[derive(Debug, Serialize)]
pub struct Scored {
  pub document: Document,
  pub score:    u32,
}

/// `GET /documents/recommended[?limit=<n>]`
pub async fn recommended<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  query: Result<Query<RecommendedParams>, QueryRejection>,
) -> Result<Json<Vec<Scored>>, ApiError> {
  let Query(params) = query?;
  let limit = params.limit.unwrap_or(DEFAULT_RECOMMENDED);
  let ranked = recommend(corpus.documents(), limit)
    .into_iter()
    .map(|r| Scored { document: r.document.clone(), score: r.score })
    .collect();
  Ok(Json(ranked))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /documents/:id`
pub async fn get_one<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
  found(corpus.document(&id), "document", &id)
}
