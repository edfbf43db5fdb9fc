//! Handler for `GET /feed`.
//!
//! `order` is `chronological` (default) or `shuffled`; `seed` picks the
//! shuffle permutation. `offset`/`limit` page through the ordered feed and
//! the response carries `next_offset` for the following request.

use std::sync::Arc;

use anno_core::{
  corpus::Corpus,
  feed::{FeedOrder, FeedPage, build_feed, order_feed, paginate},
};
use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::error::ApiError;

const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
  pub order:  Option<String>,
  pub seed:   Option<u64>,
  pub offset: Option<usize>,
  pub limit:  Option<usize>,
}

/// `GET /feed[?order=..][&seed=..][&offset=..][&limit=..]`
pub async fn handler<C: Corpus + 'static>(
  State(corpus): State<Arc<C>>,
  query: Result<Query<FeedParams>, QueryRejection>,
) -> Result<Json<FeedPage>, ApiError> {
  let Query(params) = query?;
  let order = FeedOrder::parse(params.order.as_deref(), params.seed)?;
  let mut items = build_feed(corpus.as_ref());
  order_feed(&mut items, order);
  Ok(Json(paginate(
    &items,
    params.offset.unwrap_or(0),
    params.limit.unwrap_or(DEFAULT_LIMIT),
  )))
}

#[cfg(test)]
mod tests {
  use axum::http::StatusCode;

  use crate::test_support::get_json;

  #[tokio::test]
  async fn first_page_links_to_the_next() {
    let (status, body) = get_json("/feed?limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 10);
    assert_eq!(body["next_offset"], 10);
    assert_eq!(body["items"][0]["id"], "pentecost");
  }

  #[tokio::test]
  async fn last_page_has_no_next() {
    let (_, first) = get_json("/feed?limit=1").await;
    let total = first["total"].as_u64().unwrap();
    let (_, last) = get_json(&format!("/feed?offset={}&limit=5", total - 1)).await;
    assert_eq!(last["items"].as_array().unwrap().len(), 1);
    assert!(last["next_offset"].is_null());
  }

  #[tokio::test]
  async fn shuffled_is_stable_for_a_seed() {
    let (_, a) = get_json("/feed?order=shuffled&seed=42&limit=100").await;
    let (_, b) = get_json("/feed?order=shuffled&seed=42&limit=100").await;
    assert_eq!(a, b);
  }

  #[tokio::test]
  async fn unknown_order_is_400() {
    let (status, _) = get_json("/feed?order=backwards").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }
}
