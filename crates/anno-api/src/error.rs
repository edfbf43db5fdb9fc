//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::QueryRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),
}

impl From<anno_core::Error> for ApiError {
  fn from(e: anno_core::Error) -> Self { ApiError::BadRequest(e.to_string()) }
}

impl From<QueryRejection> for ApiError {
  fn from(e: QueryRejection) -> Self { ApiError::BadRequest(e.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
    };
    tracing::debug!(%status, %message, "api error");
    (status, Json(json!({ "error": message }))).into_response()
  }
}

/// Clone a looked-up record out, or report which one was missing.
pub(crate) fn found<T: Clone>(
  record: Option<&T>,
  kind: &str,
  id: &str,
) -> Result<Json<T>, ApiError> {
  record
    .cloned()
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("{kind} {id} not found")))
}
