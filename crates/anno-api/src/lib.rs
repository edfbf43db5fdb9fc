//! JSON REST API for Anno Domini.
//!
//! Exposes an axum [`Router`] backed by any [`anno_core::corpus::Corpus`].
//! Every endpoint is a read; the corpus is immutable.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", anno_api::api_router(corpus.clone()))
//! ```

pub mod calendar;
pub mod documents;
pub mod eras;
pub mod error;
pub mod events;
pub mod feed;
pub mod figures;
pub mod quotes;
pub mod search;
pub mod sources;

use std::sync::Arc;

use anno_core::corpus::Corpus;
use axum::{Router, routing::get};

pub use error::ApiError;

/// Build a fully-materialised API router for `corpus`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<C>(corpus: Arc<C>) -> Router<()>
where
  C: Corpus + 'static,
{
  Router::new()
    // Eras
    .route("/eras", get(eras::list::<C>))
    .route("/eras/{id}", get(eras::get_one::<C>))
    // Events
    .route("/events", get(events::list::<C>))
    .route("/events/{id}", get(events::get_one::<C>))
    // Figures
    .route("/figures", get(figures::list::<C>))
    .route("/figures/{id}", get(figures::get_one::<C>))
    // Documents
    .route("/documents", get(documents::list::<C>))
    .route("/documents/recommended", get(documents::recommended::<C>))
    .route("/documents/{id}", get(documents::get_one::<C>))
    // Sources
    .route("/categories", get(sources::categories::<C>))
    .route("/sources", get(sources::list::<C>))
    .route("/sources/{id}", get(sources::get_one::<C>))
    // Quotes
    .route("/quotes", get(quotes::list::<C>))
    .route("/quotes/{id}", get(quotes::get_one::<C>))
    // Aggregates
    .route("/feed", get(feed::handler::<C>))
    .route("/on-this-day", get(calendar::handler::<C>))
    .route("/search", get(search::handler::<C>))
    .with_state(corpus)
}

#[cfg(test)]
pub(crate) mod test_support {
  use std::sync::Arc;

  use anno_core::corpus::Corpus;
  use anno_store_memory::MemoryCorpus;
  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use tower::ServiceExt as _;

  pub fn corpus() -> Arc<MemoryCorpus> {
    let json = include_str!("../../../data/corpus.json");
    Arc::new(MemoryCorpus::from_json_str(json).unwrap())
  }

  /// GET `uri` against a fresh router; returns status and parsed JSON body.
  pub async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    get_json_from(corpus(), uri).await
  }

  /// As [`get_json`], against a caller-built corpus.
  pub async fn get_json_from<C: Corpus + 'static>(
    corpus: Arc<C>,
    uri: &str,
  ) -> (StatusCode, serde_json::Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = super::api_router(corpus).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }
}
