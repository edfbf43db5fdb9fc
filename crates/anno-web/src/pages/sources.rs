//! Federated sources: `/sources`, `/sources/{category}`,
//! `/sources/view/{id}` and `/sources/topic/{topic}`.
//!
//! Sources are metadata about externally hosted material; the detail page
//! links out and never embeds.

use anno_core::{corpus::Corpus, date::year_label, model::FederatedSource};
use axum::{
  extract::{Path, State},
  http::HeaderMap,
  response::Response,
};
use maud::{Markup, html};

use crate::{
  AppState,
  components::{cards, era_badge, source_card, topic_path},
  error::Error,
  layout::{Nav, Page},
  pages::html,
};

fn source_cards<C: Corpus>(corpus: &C, sources: Vec<&FederatedSource>) -> Markup {
  cards(
    sources
      .into_iter()
      .map(|s| source_card(s, corpus.category(&s.category_id)))
      .collect(),
    "No sources are listed here yet.",
  )
}

/// `GET /sources`
pub async fn index<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();

  let body = html! {
    h1 { "Sources" }
    p { "Archives, translations and scholarship hosted elsewhere on the web." }
    section {
      h2 { "Categories" }
      div.cards {
        @for category in corpus.categories() {
          article.card.category {
            h3 {
              a href=(format!("/sources/{}", category.id)) { (category.name) }
            }
            p { (category.description) }
            p.meta {
              (corpus.sources_in_category(&category.id).len()) " sources"
            }
          }
        }
      }
    }
    section {
      h2 { "Topics" }
      p.topics {
        @for topic in corpus.source_topics() {
          a.badge href=(topic_path(&topic)) { (topic) } " "
        }
      }
    }
  };

  Ok(html(&headers, Page::new("Sources", Nav::Sources, body)))
}

/// `GET /sources/{category}`
pub async fn category<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  Path(category_id): Path<String>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();
  let category = corpus
    .category(&category_id)
    .ok_or_else(|| Error::not_found("source category", &category_id, "/sources"))?;

  let body = html! {
    p { a href="/sources" { "← All sources" } }
    h1 { (category.name) }
    p { (category.description) }
    (source_cards(corpus, corpus.sources_in_category(&category.id)))
  };

  Ok(html(&headers, Page::new(category.name.as_str(), Nav::Sources, body)))
}

/// `GET /sources/topic/{topic}`
pub async fn topic<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  Path(topic): Path<String>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();
  let title = format!("Topic: {topic}");

  let body = html! {
    p { a href="/sources" { "← All sources" } }
    h1 { (title) }
    (source_cards(corpus, corpus.sources_with_topic(&topic)))
  };

  Ok(html(&headers, Page::new(title.as_str(), Nav::Sources, body)))
}

/// `GET /sources/view/{id}`
pub async fn detail<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();
  let source = corpus
    .source(&id)
    .ok_or_else(|| Error::not_found("source", &id, "/sources"))?;
  let category = corpus.category(&source.category_id);

  let body = html! {
    article {
      h1 { (source.title) }
      p.meta {
        @if let Some(category) = category {
          a href=(format!("/sources/{}", category.id)) { (category.name) }
        }
        @if let Some(era) = source.era_id.as_deref().and_then(|e| corpus.era(e)) {
          " " (era_badge(era))
        }
      }
      dl {
        @if let Some(publisher) = &source.publisher {
          dt { "Publisher" } dd { (publisher) }
        }
        @if let Some(year) = source.year {
          dt { "Published" } dd { (year_label(year)) }
        }
        dt { "Address" } dd { code { (source.url) } }
      }
      p { (source.summary) }
      p { a href=(source.url) rel="noopener external" { "Visit the source" } }
      @if !source.topics.is_empty() {
        p.topics {
          @for topic in &source.topics {
            a.badge href=(topic_path(topic)) { (topic) } " "
          }
        }
      }
    }
  };

  Ok(html(&headers, Page::new(source.title.as_str(), Nav::Sources, body)))
}
