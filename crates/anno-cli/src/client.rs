//! Async HTTP client wrapping the Anno Domini JSON API.

use std::time::Duration;

use anno_core::model::{Document, Event, Figure, Quote};
use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::catalog::Catalog;

/// Async HTTP client for the read-only JSON API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url: base_url.into() })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let resp = self
      .client
      .get(self.url(path))
      .send()
      .await
      .with_context(|| format!("GET {path} failed"))?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET {path} returned {}", resp.status()));
    }

    resp
      .json()
      .await
      .with_context(|| format!("decoding GET {path}"))
  }

  /// `GET /api/figures`
  pub async fn figures(&self) -> Result<Vec<Figure>> {
    self.get("/figures").await
  }

  /// `GET /api/events`
  pub async fn events(&self) -> Result<Vec<Event>> {
    self.get("/events").await
  }

  /// `GET /api/documents`
  pub async fn documents(&self) -> Result<Vec<Document>> {
    self.get("/documents").await
  }

  /// `GET /api/quotes`
  pub async fn quotes(&self) -> Result<Vec<Quote>> {
    self.get("/quotes").await
  }

  /// Fetch every collection the browser shows, concurrently.
  pub async fn catalog(&self) -> Result<Catalog> {
    let (figures, events, documents, quotes) = tokio::try_join!(
      self.figures(),
      self.events(),
      self.documents(),
      self.quotes(),
    )?;
    Ok(Catalog { figures, events, documents, quotes })
  }
}
