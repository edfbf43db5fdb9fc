//! ETag computation and conditional GET for rendered pages.
//!
//! ETags are strong: the quoted hex SHA-256 of the exact response body. The
//! corpus is immutable, so a page's ETag only changes when its markup does.

use axum::{
  body::Body,
  http::{HeaderMap, HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use maud::Markup;
use sha2::{Digest, Sha256};

/// Compute a strong ETag for `body`.
pub fn compute_etag(body: &[u8]) -> String {
  let hash = Sha256::digest(body);
  format!("\"{}\"", hex::encode(hash))
}

/// Does the request's `If-None-Match` list contain `etag` (or `*`)?
///
/// Weak validators compare equal to their strong form, as GET allows.
pub fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
  headers
    .get_all(header::IF_NONE_MATCH)
    .iter()
    .filter_map(|v| v.to_str().ok())
    .flat_map(|v| v.split(','))
    .map(str::trim)
    .any(|candidate| {
      candidate == "*" || candidate.trim_start_matches("W/") == etag
    })
}

/// Render `markup` as a 200 HTML response with an ETag, or a bodyless 304
/// when the client already holds it.
pub fn html(headers: &HeaderMap, markup: Markup) -> Response {
  respond(headers, "text/html; charset=utf-8", markup.into_string())
}

/// Like [`html`] for an arbitrary content type.
pub fn respond(
  headers: &HeaderMap,
  content_type: &'static str,
  body: String,
) -> Response {
  let etag = compute_etag(body.as_bytes());
  let Ok(etag_value) = HeaderValue::from_str(&etag) else {
    return (StatusCode::INTERNAL_SERVER_ERROR, "bad etag").into_response();
  };

  if if_none_match(headers, &etag) {
    return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag_value)])
      .into_response();
  }

  (
    StatusCode::OK,
    [
      (header::CONTENT_TYPE, HeaderValue::from_static(content_type)),
      (header::ETAG, etag_value),
    ],
    Body::from(body),
  )
    .into_response()
}

/// An uncached HTML response with an explicit status, for error pages.
pub fn with_status(status: StatusCode, markup: Markup) -> Response {
  (
    status,
    [(
      header::CONTENT_TYPE,
      HeaderValue::from_static("text/html; charset=utf-8"),
    )],
    markup.into_string(),
  )
    .into_response()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn headers(value: &str) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::IF_NONE_MATCH, HeaderValue::from_str(value).unwrap());
    h
  }

  #[test]
  fn same_body_same_etag() {
    assert_eq!(compute_etag(b"<p>hi</p>"), compute_etag(b"<p>hi</p>"));
    assert_ne!(compute_etag(b"<p>hi</p>"), compute_etag(b"<p>ho</p>"));
  }

  #[test]
  fn etag_is_quoted_hex_sha256() {
    let etag = compute_etag(b"");
    assert_eq!(
      etag,
      "\"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\""
    );
  }

  #[test]
  fn if_none_match_accepts_lists_weak_and_star() {
    let etag = compute_etag(b"body");
    assert!(if_none_match(&headers(&etag), &etag));
    assert!(if_none_match(&headers(&format!("\"x\", {etag}")), &etag));
    assert!(if_none_match(&headers(&format!("W/{etag}")), &etag));
    assert!(if_none_match(&headers("*"), &etag));
    assert!(!if_none_match(&headers("\"x\""), &etag));
    assert!(!if_none_match(&HeaderMap::new(), &etag));
  }

  #[test]
  fn matching_request_gets_304_without_body() {
    let body = "<p>cached</p>".to_string();
    let etag = compute_etag(body.as_bytes());
    let resp = respond(&headers(&etag), "text/html; charset=utf-8", body);
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(resp.headers()[header::ETAG], etag.as_str());
    assert!(resp.headers().get(header::CONTENT_TYPE).is_none());
  }
}
