//! Handlers for `/sources` and `/categories`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/categories` | All source categories |
//! | `GET`  | `/sources` | Optional `category`, `topic` |
//! | `GET`  | `/sources/:id` | 404 if not found |

use std::sync::Arc;

use anno_core::{
  corpus::{Corpus, same_label},
  model::{Category, FederatedSource},
};
use axum::{
  Json,
  extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::error::{ApiError, found};

/// `GET /categories`
pub async fn categories<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
) -> Json<Vec<Category>> {
  Json(corpus.categories().to_vec())
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub category: Option<String>,
  /// Compared case-insensitively.
  pub topic:    Option<String>,
}

/// `GET /sources[?category=..][&topic=..]`
pub async fn list<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<FederatedSource>>, ApiError> {
  let Query(params) = query?;
  let sources = corpus
    .sources()
    .iter()
    .filter(|s| {
      params
        .category
        .as_deref()
        .is_none_or(|c| s.category_id == c)
    })
    .filter(|s| {
      params
        .topic
        .as_deref()
        .is_none_or(|t| s.topics.iter().any(|st| same_label(st, t)))
    })
    .cloned()
    .collect();
  Ok(Json(sources))
}

/// `GET /sources/:id`
pub async fn get_one<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  Path(id): Path<String>,
) -> Result<Json<FederatedSource>, ApiError> {
  found(corpus.source(&id), "source", &id)
}

#[cfg(test)]
mod tests {
  use crate::test_support::get_json;

  #[tokio::test]
  async fn topic_filter_is_case_insensitive() {
    let (_, body) = get_json("/sources?topic=Patristics").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
  }

  #[tokio::test]
  async fn category_and_topic_combine() {
    let (_, body) = get_json("/sources?category=archives&topic=medieval").await;
    let sources = body.as_array().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["id"], "medieval-sourcebook");
  }

  #[tokio::test]
  async fn categories_are_listed() {
    let (_, body) = get_json("/categories").await;
    assert_eq!(body.as_array().unwrap().len(), 4);
  }
}
