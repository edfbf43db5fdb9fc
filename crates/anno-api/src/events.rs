//! Handlers for `/events` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/events` | Chronological; optional `era`, `century`, `figure`, `from`, `to` |
//! | `GET`  | `/events/:id` | 404 if not found |

use std::sync::Arc;

use anno_core::{
  corpus::{Corpus, EventQuery},
  model::Event,
};
use axum::{
  Json,
  extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::error::{ApiError, found};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub era:     Option<String>,
  pub century: Option<i32>,
  pub figure:  Option<String>,
  /// Inclusive lower bound on the year.
  pub from:    Option<i32>,
  /// Inclusive upper bound on the year.
  pub to:      Option<i32>,
}

impl From<ListParams> for EventQuery {
  fn from(p: ListParams) -> Self {
    EventQuery {
      era_id:    p.era,
      century:   p.century,
      figure_id: p.figure,
      year_from: p.from,
      year_to:   p.to,
    }
  }
}

/// `GET /events[?era=..][&century=..][&figure=..][&from=..][&to=..]`
pub async fn list<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Event>>, ApiError> {
  let Query(params) = query?;
  let query = EventQuery::from(params);
  Ok(Json(corpus.query_events(&query).into_iter().cloned().collect()))
}

/// `GET /events/:id`
pub async fn get_one<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
  found(corpus.event(&id), "event", &id)
}

#[cfg(test)]
mod tests {
  use axum::http::StatusCode;

  use crate::test_support::get_json;

  #[tokio::test]
  async fn era_filter_returns_only_matching_events() {
    let (status, body) = get_json("/events?era=reformation").await;
    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e["era_id"] == "reformation"));
  }

  #[tokio::test]
  async fn century_filter() {
    let (_, body) = get_json("/events?century=4").await;
    let ids: Vec<&str> = body
      .as_array()
      .unwrap()
      .iter()
      .map(|e| e["id"].as_str().unwrap())
      .collect();
    assert_eq!(
      ids,
      ["edict-of-milan", "council-of-nicaea", "conversion-of-augustine"]
    );
  }

  #[tokio::test]
  async fn malformed_query_is_a_json_400() {
    let (status, body) = get_json("/events?century=fourth").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("century"));
  }

  #[tokio::test]
  async fn unknown_event_is_404() {
    let (status, _) = get_json("/events/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }
}
