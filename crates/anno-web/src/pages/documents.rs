//! `/documents` and `/documents/{id}`.
//!
//! The list page opens with a "what to read" section: the best-scoring
//! documents among those the current tab shows.

use anno_core::{corpus::Corpus, date::year_label, recommend::recommend};
use axum::{
  extract::{Path, Query, State, rejection::QueryRejection},
  http::HeaderMap,
  response::Response,
};
use maud::html;
use serde::Deserialize;

use crate::{
  AppState,
  components::{
    cards, document_card, era_badge, filter_tabs, kind_badge, quote_card,
    share,
  },
  error::Error,
  layout::{Nav, Page},
  pages::html,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub kind: Option<String>,
}

/// `GET /documents[?kind=..]`
pub async fn list<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let Query(params) = query?;
  let corpus = state.corpus.as_ref();
  let kind = params.kind.as_deref().map(str::to_lowercase);

  let documents = match &kind {
    Some(kind) => corpus.documents_of_kind(kind),
    None => corpus.documents().iter().collect(),
  };
  let picks = recommend(documents.iter().copied(), state.config.recommended_count);

  let kinds: Vec<(String, String)> = corpus
    .document_kinds()
    .into_iter()
    .map(|k| (k.clone(), k))
    .collect();
  let author = |author_id: &Option<String>| {
    author_id.as_deref().and_then(|id| corpus.figure(id))
  };

  let body = html! {
    h1 { "Documents" }
    (filter_tabs("/documents", "kind", &kinds, kind.as_deref(), &[]))
    @if !picks.is_empty() {
      section.what-to-read {
        h2 { "What to read" }
        ol {
          @for pick in &picks {
            li {
              a href=(format!("/documents/{}", pick.document.id)) {
                (pick.document.title)
              }
              " "
              span.meta { (kind_badge(&pick.document.kind)) }
            }
          }
        }
      }
    }
    section {
      h2 { "All documents" }
      (cards(
        documents
          .iter()
          .map(|d| document_card(d, author(&d.author_id)))
          .collect(),
        "No documents of this kind.",
      ))
    }
  };

  Ok(html(&headers, Page::new("Documents", Nav::Documents, body)))
}

/// `GET /documents/{id}`
pub async fn detail<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();
  let doc = corpus
    .document(&id)
    .ok_or_else(|| Error::not_found("document", &id, "/documents"))?;
  let author = doc.author_id.as_deref().and_then(|a| corpus.figure(a));
  let quotes = corpus.quotes_from_document(&doc.id);
  let url = state.config.absolute(&format!("/documents/{id}"));

  let body = html! {
    article {
      h1 { (doc.title) }
      p.meta {
        (kind_badge(&doc.kind)) " "
        @if let Some(author) = author {
          a href=(format!("/figures/{}", author.id)) { (author.name) } ", "
        }
        (year_label(doc.year))
        @if let Some(era) = corpus.era(&doc.era_id) { " " (era_badge(era)) }
      }
      @if let Some(words) = doc.word_count {
        p.meta { "About " (words) " words" }
      }
      p { (doc.summary) }
      @if let Some(link) = &doc.url {
        p { a href=(link) rel="noopener" { "Read the text" } }
      }
    }
    section {
      h2 { "Quoted from this text" }
      (cards(
        quotes
          .into_iter()
          .map(|q| quote_card(q, corpus.figure(&q.figure_id)))
          .collect(),
        "No quotes are recorded from this text.",
      ))
    }
    (share(&url, &doc.title))
  };

  Ok(html(&headers, Page::new(doc.title.as_str(), Nav::Documents, body)))
}

#[cfg(test)]
mod tests {
  use axum::http::StatusCode;

  use crate::test_support::get_page;

  fn what_to_read(body: &str) -> &str {
    let start = body.find("What to read").unwrap();
    let end = body.find("All documents").unwrap();
    &body[start..end]
  }

  #[tokio::test]
  async fn what_to_read_leads_with_the_creed() {
    let (status, body) = get_page("/documents").await;
    assert_eq!(status, StatusCode::OK);
    let picks = what_to_read(&body);
    let first = picks.find("/documents/").unwrap();
    assert!(picks[first..].starts_with("/documents/nicene-creed\""));
    assert_eq!(picks.matches("<li>").count(), 5);
  }

  #[tokio::test]
  async fn ranking_is_repeatable() {
    let (_, a) = get_page("/documents").await;
    let (_, b) = get_page("/documents").await;
    assert_eq!(what_to_read(&a), what_to_read(&b));
  }

  #[tokio::test]
  async fn kind_tab_filters_documents() {
    let (_, body) = get_page("/documents?kind=treatise").await;
    assert!(body.contains("/documents/against-heresies"));
    assert!(body.contains("/documents/summa-theologiae"));
    assert!(!body.contains("/documents/nicene-creed"));
    assert!(body.contains("<a href=\"/documents?kind=treatise\" class=\"active\">"));
  }

  #[tokio::test]
  async fn unknown_kind_is_an_empty_state() {
    let (status, body) = get_page("/documents?kind=palimpsest").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No documents of this kind."));
    assert!(!body.contains("What to read"));
  }

  #[tokio::test]
  async fn detail_links_author_and_quotes() {
    let (status, body) = get_page("/documents/confessions").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/figures/augustine"));
    assert!(body.contains("/quotes/restless-heart"));
    assert!(body.contains("About 110000 words"));
  }
}
