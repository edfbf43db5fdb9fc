//! Handlers for `/eras` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/eras` | All eras in corpus order |
//! | `GET`  | `/eras/:id` | 404 if not found |

use std::sync::Arc;

use anno_core::{corpus::Corpus, model::Era};
use axum::{
  Json,
  extract::{Path, State},
};

use crate::error::{ApiError, found};

/// `GET /eras`
pub async fn list<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
) -> Json<Vec<Era>> {
  Json(corpus.eras().to_vec())
}

/// `GET /eras/:id`
pub async fn get_one<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  Path(id): Path<String>,
) -> Result<Json<Era>, ApiError> {
  found(corpus.era(&id), "era", &id)
}

#[cfg(test)]
mod tests {
  use axum::http::StatusCode;

  use crate::test_support::get_json;

  #[tokio::test]
  async fn list_returns_every_era() {
    let (status, body) = get_json("/eras").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 7);
  }

  #[tokio::test]
  async fn unknown_era_is_404() {
    let (status, body) = get_json("/eras/atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "era atlantis not found");
  }
}
