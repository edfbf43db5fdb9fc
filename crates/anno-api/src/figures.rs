//! Handlers for `/figures` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/figures` | Optional `?era=<id>` |
//! | `GET`  | `/figures/:id` | 404 if not found |

use std::sync::Arc;

use anno_core::{corpus::Corpus, model::Figure};
use axum::{
  Json,
  extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::error::{ApiError, found};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub era: Option<String>,
}

/// `GET /figures[?era=<id>]`
pub async fn list<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Figure>>, ApiError> {
  let Query(params) = query?;
  let figures = match &params.era {
    Some(era) => corpus.figures_in_era(era).into_iter().cloned().collect(),
    None => corpus.figures().to_vec(),
  };
  Ok(Json(figures))
}

/// `GET /figures/:id`
pub async fn get_one<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  Path(id): Path<String>,
) -> Result<Json<Figure>, ApiError> {
  found(corpus.figure(&id), "figure", &id)
}
