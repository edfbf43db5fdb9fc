//! Error types and axum `IntoResponse` implementation.
//!
//! Every error renders as a full HTML page in the site chrome, so a reader
//! who follows a stale link still has navigation back into the site.

use axum::{
  extract::rejection::QueryRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use maud::html;
use thiserror::Error;

use crate::{
  etag,
  layout::{self, Nav, Page},
};

#[derive(Debug, Error)]
pub enum Error {
  /// A detail page for an id that does not exist. `back` is the listing
  /// page of the collection.
  #[error("{kind} {id} not found")]
  NotFound {
    kind: &'static str,
    id:   String,
    back: &'static str,
  },
  #[error("page not found")]
  NoSuchPage,
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("feed error: {0}")]
  Feed(#[from] std::io::Error),
}

impl Error {
  pub fn not_found(kind: &'static str, id: &str, back: &'static str) -> Self {
    Error::NotFound { kind, id: id.to_string(), back }
  }
}

impl From<anno_core::Error> for Error {
  fn from(e: anno_core::Error) -> Self { Error::BadRequest(e.to_string()) }
}

impl From<QueryRejection> for Error {
  fn from(e: QueryRejection) -> Self { Error::BadRequest(e.body_text()) }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, title, body) = match &self {
      Error::NotFound { kind, id, back } => (
        StatusCode::NOT_FOUND,
        "Not found",
        html! {
          h1 { "Not found" }
          p { "There is no " (kind) " called " code { (id) } "." }
          p { a href=(back) { "Back to the list" } }
        },
      ),
      Error::NoSuchPage => (
        StatusCode::NOT_FOUND,
        "Not found",
        html! {
          h1 { "Not found" }
          p { "That page does not exist." }
          p { a href="/" { "Go home" } }
        },
      ),
      Error::BadRequest(msg) => (
        StatusCode::BAD_REQUEST,
        "Bad request",
        html! {
          h1 { "Bad request" }
          p { (msg) }
          p { a href="/" { "Go home" } }
        },
      ),
      Error::Feed(e) => {
        tracing::error!(error = %e, "failed to render feed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "Server error",
          html! {
            h1 { "Something went wrong" }
            p { "The feed could not be rendered." }
          },
        )
      }
    };
    tracing::debug!(%status, error = %self, "page error");

    etag::with_status(status, layout::render(Page::new(title, Nav::None, body)))
  }
}
