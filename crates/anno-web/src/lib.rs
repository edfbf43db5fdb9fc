//! Server-rendered website for Anno Domini.
//!
//! Exposes an axum [`Router`] that renders every page of the site as HTML
//! from any [`Corpus`], and mounts the JSON API under `/api`.
//!
//! | Path                      | Page                                      |
//! |---------------------------|-------------------------------------------|
//! | `/`                       | landing page (bare chrome)                |
//! | `/feed`, `/feed.xml`      | aggregated feed, Atom rendering           |
//! | `/timeline`               | events, `?era=` / `?century=` tabs        |
//! | `/events/{id}`            | event detail                              |
//! | `/figures[/{id}]`         | figures, `?era=` tabs                     |
//! | `/documents[/{id}]`       | documents, `?kind=` tabs, what to read    |
//! | `/eras[/{id}]`            | eras                                      |
//! | `/sources/...`            | categories, topics, source detail         |
//! | `/quotes[/{id}]`          | quotes, `?topic=` tabs                    |
//! | `/on-this-day`            | `?month=&day=`, defaults to today         |
//! | `/search`                 | `?q=` across every collection             |
//! | `/about` `/privacy` `/terms` | static pages                           |

pub mod atom;
pub mod components;
pub mod error;
pub mod etag;
pub mod layout;
pub mod pages;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use anno_core::corpus::Corpus;
use axum::{Router, routing::get};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use pages::{
  calendar, documents, eras, events, feed, figures, home, info, quotes,
  search, sources,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime site configuration, deserialised from `config.toml` and `ANNO_*`
/// environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SiteConfig {
  pub host:              String,
  pub port:              u16,
  /// Absolute origin used for links that leave the site (Atom ids, share
  /// links). No trailing slash.
  pub base_url:          String,
  pub corpus_path:       PathBuf,
  pub feed_page_size:    usize,
  pub recommended_count: usize,
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      host:              "127.0.0.1".to_string(),
      port:              8080,
      base_url:          "http://localhost:8080".to_string(),
      corpus_path:       PathBuf::from("data/corpus.json"),
      feed_page_size:    20,
      recommended_count: 5,
    }
  }
}

impl SiteConfig {
  /// `base_url` joined with a site path.
  pub fn absolute(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<C: Corpus> {
  pub corpus:    Arc<C>,
  pub config:    Arc<SiteConfig>,
  /// When the corpus was loaded; the Atom feed's `updated` stamp.
  pub loaded_at: DateTime<Utc>,
}

impl<C: Corpus> AppState<C> {
  pub fn new(corpus: C, config: SiteConfig) -> Self {
    Self {
      corpus:    Arc::new(corpus),
      config:    Arc::new(config),
      loaded_at: Utc::now(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the site [`Router`], with the JSON API nested under `/api`.
pub fn router<C>(state: AppState<C>) -> Router
where
  C: Corpus + Clone + 'static,
{
  let api = anno_api::api_router(state.corpus.clone());

  Router::new()
    .route("/",                       get(home::handler::<C>))
    .route("/feed",                   get(feed::page::<C>))
    .route("/feed.xml",               get(feed::atom_feed::<C>))
    .route("/timeline",               get(events::timeline::<C>))
    .route("/events/{id}",            get(events::detail::<C>))
    .route("/figures",                get(figures::list::<C>))
    .route("/figures/{id}",           get(figures::detail::<C>))
    .route("/documents",              get(documents::list::<C>))
    .route("/documents/{id}",         get(documents::detail::<C>))
    .route("/eras",                   get(eras::list::<C>))
    .route("/eras/{id}",              get(eras::detail::<C>))
    .route("/sources",                get(sources::index::<C>))
    .route("/sources/{category}",     get(sources::category::<C>))
    .route("/sources/view/{id}",      get(sources::detail::<C>))
    .route("/sources/topic/{topic}",  get(sources::topic::<C>))
    .route("/quotes",                 get(quotes::list::<C>))
    .route("/quotes/{id}",            get(quotes::detail::<C>))
    .route("/on-this-day",            get(calendar::handler::<C>))
    .route("/search",                 get(search::handler::<C>))
    .route("/about",                  get(info::about))
    .route("/privacy",                get(info::privacy))
    .route("/terms",                  get(info::terms))
    .nest_service("/api", api)
    .fallback(pages::not_found)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
  use anno_store_memory::MemoryCorpus;
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use tower::ServiceExt as _;

  use super::*;

  pub fn make_state() -> AppState<MemoryCorpus> {
    let json = include_str!("../../../data/corpus.json");
    let corpus = MemoryCorpus::from_json_str(json).unwrap();
    AppState::new(corpus, SiteConfig {
      base_url: "https://anno.example".to_string(),
      feed_page_size: 10,
      ..SiteConfig::default()
    })
  }

  pub async fn oneshot_raw(
    uri:     &str,
    headers: Vec<(header::HeaderName, &str)>,
  ) -> axum::response::Response {
    let mut builder = Request::builder().uri(uri);
    for (k, v) in headers {
      builder = builder.header(k, v);
    }
    let req = builder.body(Body::empty()).unwrap();
    router(make_state()).oneshot(req).await.unwrap()
  }

  /// GET `uri`; returns status and the body as text.
  pub async fn get_page(uri: &str) -> (StatusCode, String) {
    let resp = oneshot_raw(uri, vec![]).await;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
  }
}

#[cfg(test)]
mod tests {
  use axum::http::{StatusCode, header};

  use super::test_support::{get_page, oneshot_raw};

  // ── Chrome ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn landing_page_uses_bare_chrome() {
    let (status, body) = get_page("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("chrome-bare"));
    assert!(!body.contains("class=\"sidebar\""));
  }

  #[tokio::test]
  async fn inner_pages_use_full_chrome() {
    for uri in ["/timeline", "/figures", "/documents", "/eras", "/about"] {
      let (status, body) = get_page(uri).await;
      assert_eq!(status, StatusCode::OK, "{uri}");
      assert!(body.contains("chrome-full"), "{uri}");
      assert!(body.contains("class=\"sidebar\""), "{uri}");
      assert!(body.contains("id=\"nav-drawer\""), "{uri}");
    }
  }

  // ── Not found ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unknown_path_is_404_with_link_home() {
    let (status, body) = get_page("/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("href=\"/\""));
  }

  #[tokio::test]
  async fn unknown_ids_link_back_to_their_listing() {
    let cases = [
      ("/events/atlantis", "/timeline"),
      ("/figures/nobody", "/figures"),
      ("/documents/lost-gospel", "/documents"),
      ("/eras/golden-age", "/eras"),
      ("/sources/view/geocities", "/sources"),
      ("/sources/misc", "/sources"),
      ("/quotes/misattributed", "/quotes"),
    ];
    for (uri, back) in cases {
      let (status, body) = get_page(uri).await;
      assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
      assert!(body.contains(&format!("href=\"{back}\"")), "{uri}");
    }
  }

  // ── ETags ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn pages_carry_a_strong_etag() {
    let resp = oneshot_raw("/figures/augustine", vec![]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let etag = resp.headers()[header::ETAG].to_str().unwrap();
    assert!(etag.starts_with('"') && etag.ends_with('"'));
    assert_eq!(etag.len(), 66);
  }

  #[tokio::test]
  async fn matching_if_none_match_is_304() {
    let first = oneshot_raw("/eras/nicene", vec![]).await;
    let etag = first.headers()[header::ETAG].to_str().unwrap().to_string();

    let second =
      oneshot_raw("/eras/nicene", vec![(header::IF_NONE_MATCH, &etag)]).await;
    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(second.headers()[header::ETAG], etag.as_str());

    let stale = oneshot_raw("/eras/nicene", vec![(
      header::IF_NONE_MATCH,
      "\"0000\"",
    )])
    .await;
    assert_eq!(stale.status(), StatusCode::OK);
  }

  // ── API mount ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn api_is_mounted() {
    let resp = oneshot_raw("/api/eras/nicene", vec![]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers()[header::CONTENT_TYPE],
      "application/json"
    );
  }

  #[tokio::test]
  async fn static_pages_render() {
    for uri in ["/about", "/privacy", "/terms"] {
      let (status, _) = get_page(uri).await;
      assert_eq!(status, StatusCode::OK, "{uri}");
    }
  }
}
