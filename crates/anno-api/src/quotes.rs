//! Handlers for `/quotes` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/quotes` | Optional `figure`, `topic` |
//! | `GET`  | `/quotes/:id` | 404 if not found |

use std::sync::Arc;

use anno_core::{
  corpus::{Corpus, same_label},
  model::Quote,
};
use axum::{
  Json,
  extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::error::{ApiError, found};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub figure: Option<String>,
  pub topic:  Option<String>,
}

/// `GET /quotes[?figure=..][&topic=..]`
pub async fn list<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Quote>>, ApiError> {
  let Query(params) = query?;
  let quotes = corpus
    .quotes()
    .iter()
    .filter(|q| params.figure.as_deref().is_none_or(|f| q.figure_id == f))
    .filter(|q| {
      params
        .topic
        .as_deref()
        .is_none_or(|t| q.topics.iter().any(|qt| same_label(qt, t)))
    })
    .cloned()
    .collect();
  Ok(Json(quotes))
}

/// `GET /quotes/:id`
pub async fn get_one<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  Path(id): Path<String>,
) -> Result<Json<Quote>, ApiError> {
  found(corpus.quote(&id), "quote", &id)
}

#[cfg(test)]
mod tests {
  use axum::http::StatusCode;

  use crate::test_support::get_json;

  #[tokio::test]
  async fn topic_filter() {
    let (_, body) = get_json("/quotes?topic=martyrdom").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn unknown_quote_is_404() {
    let (status, body) = get_json("/quotes/apocryphal").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("apocryphal"));
  }
}
