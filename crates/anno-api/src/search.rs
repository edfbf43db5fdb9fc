//! Handler for `GET /search?text=<query>`.
//!
//! Case-insensitive substring search across every collection. A missing or
//! blank `text` returns empty groups rather than an error.

use std::sync::Arc;

use anno_core::corpus::Corpus;
use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
  response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
  pub text: Option<String>,
}

/// `GET /search[?text=..]`
pub async fn handler<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
  let Query(params) = query?;
  let text = params.text.unwrap_or_default();
  Ok(Json(corpus.search(&text)).into_response())
}
