//! `/quotes` and `/quotes/{id}`.

use anno_core::{corpus::Corpus, date::year_label};
use axum::{
  extract::{Path, Query, State, rejection::QueryRejection},
  http::HeaderMap,
  response::Response,
};
use maud::html;
use serde::Deserialize;

use crate::{
  AppState,
  components::{cards, filter_tabs, href, quote_card, share},
  error::Error,
  layout::{Nav, Page},
  pages::html,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub topic: Option<String>,
}

/// `GET /quotes[?topic=..]`
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
  let topic = params.topic.as_deref().map(str::to_lowercase);

  let quotes = match &topic {
    Some(topic) => corpus.quotes_with_topic(topic),
    None => corpus.quotes().iter().collect(),
  };
  let topics: Vec<(String, String)> = corpus
    .quote_topics()
    .into_iter()
    .map(|t| (t.clone(), t))
    .collect();

  let body = html! {
    h1 { "Quotes" }
    (filter_tabs("/quotes", "topic", &topics, topic.as_deref(), &[]))
    (cards(
      quotes
        .into_iter()
        .map(|q| quote_card(q, corpus.figure(&q.figure_id)))
        .collect(),
      "No quotes on this topic.",
    ))
  };

  Ok(html(&headers, Page::new("Quotes", Nav::Quotes, body)))
}

/// `GET /quotes/{id}`
pub async fn detail<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();
  let quote = corpus
    .quote(&id)
    .ok_or_else(|| Error::not_found("quote", &id, "/quotes"))?;
  let figure = corpus.figure(&quote.figure_id);
  let document = quote.document_id.as_deref().and_then(|d| corpus.document(d));
  let url = state.config.absolute(&format!("/quotes/{id}"));
  let title = match figure {
    Some(f) => format!("Quote from {}", f.name),
    None => "Quote".to_string(),
  };

  let body = html! {
    article {
      blockquote.quote {
        p { "“" (quote.text) "”" }
        footer {
          @if let Some(figure) = figure {
            "— " a href=(format!("/figures/{}", figure.id)) { (figure.name) }
          }
          @if let Some(doc) = document {
            ", " a href=(format!("/documents/{}", doc.id)) { cite { (doc.title) } }
          }
          @if let Some(year) = quote.year { ", " (year_label(year)) }
        }
      }
      @if !quote.topics.is_empty() {
        p.topics {
          @for topic in &quote.topics {
            a.badge href=(href("/quotes", &[("topic", Some(topic.as_str()))])) {
              (topic)
            }
            " "
          }
        }
      }
    }
    (share(&url, &title))
  };

  Ok(html(&headers, Page::new(title.as_str(), Nav::Quotes, body)))
}

#[cfg(test)]
mod tests {
  use axum::http::StatusCode;

  use crate::test_support::get_page;

  #[tokio::test]
  async fn topic_tab_shows_only_that_topic() {
    let (status, body) = get_page("/quotes?topic=martyrdom").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/quotes/eighty-six-years"));
    assert!(body.contains("/quotes/wheat-of-god"));
    assert!(!body.contains("/quotes/here-i-stand"));
  }

  #[tokio::test]
  async fn all_quotes_without_topic() {
    let (_, body) = get_page("/quotes").await;
    assert_eq!(body.matches("class=\"card quote-card\"").count(), 10);
  }

  #[tokio::test]
  async fn detail_attributes_the_quote() {
    let (status, body) = get_page("/quotes/restless-heart").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/figures/augustine"));
    assert!(body.contains("<cite>Confessions</cite>"));
    assert!(body.contains("href=\"/quotes?topic=prayer\""));
    assert!(body.contains("<title>Quote from Augustine of Hippo · Anno Domini</title>"));
  }
}
