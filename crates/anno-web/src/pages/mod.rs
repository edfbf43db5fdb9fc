//! Page handlers. Each reads from the shared corpus, lays out components and
//! returns the page through [`html`], which adds the ETag.

pub mod calendar;
pub mod documents;
pub mod eras;
pub mod events;
pub mod feed;
pub mod figures;
pub mod home;
pub mod info;
pub mod quotes;
pub mod search;
pub mod sources;

use axum::{http::HeaderMap, response::Response};

use crate::{
  error::Error,
  etag,
  layout::{self, Page},
};

pub(crate) fn html(headers: &HeaderMap, page: Page) -> Response {
  etag::html(headers, layout::render(page))
}

/// Fallback for every unrouted path.
pub async fn not_found() -> Error { Error::NoSuchPage }
