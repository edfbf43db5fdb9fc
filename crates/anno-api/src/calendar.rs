//! Handler for `GET /on-this-day?month=<m>&day=<d>`.

use std::sync::Arc;

use anno_core::{corpus::Corpus, date::DayOfYear};
use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
  response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct DayParams {
  pub month: u32,
  pub day:   u32,
}

/// `GET /on-this-day?month=<m>&day=<d>`: events, births and deaths.
pub async fn handler<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  query: Result<Query<DayParams>, QueryRejection>,
) -> Result<Response, ApiError> {
  let Query(params) = query?;
  let day = DayOfYear::new(params.month, params.day)?;
  Ok(Json(corpus.on_this_day(day)).into_response())
}
