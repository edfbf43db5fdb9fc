//! `/search?q=..` across every collection.

use anno_core::corpus::Corpus;
use axum::{
  extract::{Query, State, rejection::QueryRejection},
  http::HeaderMap,
  response::Response,
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
  AppState,
  components::{
    document_card, empty_state, era_badge, event_card, figure_card,
    quote_card, source_card,
  },
  error::Error,
  layout::{Nav, Page},
  pages::html,
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
  #[serde(default)]
  pub q: String,
}

fn group(title: &str, items: Vec<Markup>) -> Markup {
  html! {
    @if !items.is_empty() {
      section {
        h2 { (title) " (" (items.len()) ")" }
        div.cards { @for item in items { (item) } }
      }
    }
  }
}

/// `GET /search[?q=..]`
pub async fn handler<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let Query(params) = query?;
  let corpus = state.corpus.as_ref();
  let needle = params.q.trim();
  let results = corpus.search(needle);

  let body = html! {
    h1 { "Search" }
    form action="/search" method="get" role="search" {
      input type="search" name="q" value=(needle) placeholder="Nicaea, Augustine, creed…"
        aria-label="Search";
      " "
      button type="submit" { "Search" }
    }
    @if needle.is_empty() {
      (empty_state("Search names, titles, summaries and quotations."))
    } @else if results.is_empty() {
      (empty_state(&format!("Nothing matches \u{201c}{needle}\u{201d}.")))
    } @else {
      p.meta { (results.total()) " results" }
      @if !results.eras.is_empty() {
        section {
          h2 { "Eras (" (results.eras.len()) ")" }
          p { @for era in &results.eras { (era_badge(era)) " " } }
        }
      }
      (group("Events", results.events.iter()
        .map(|e| event_card(e, corpus.era(&e.era_id))).collect()))
      (group("Figures", results.figures.iter().copied().map(figure_card).collect()))
      (group("Documents", results.documents.iter()
        .map(|d| document_card(d, d.author_id.as_deref().and_then(|a| corpus.figure(a))))
        .collect()))
      (group("Sources", results.sources.iter()
        .map(|s| source_card(s, corpus.category(&s.category_id))).collect()))
      (group("Quotes", results.quotes.iter()
        .map(|q| quote_card(q, corpus.figure(&q.figure_id))).collect()))
    }
  };

  let title = if needle.is_empty() {
    "Search".to_string()
  } else {
    format!("Search: {needle}")
  };
  Ok(html(&headers, Page::new(title, Nav::Search, body)))
}
