//! `/figures` and `/figures/{id}`.

use anno_core::corpus::Corpus;
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
    cards, document_card, empty_state, era_badge, figure_card, filter_tabs,
    quote_card, share, timeline_row,
  },
  error::Error,
  layout::{Nav, Page},
  pages::html,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub era: Option<String>,
}

/// `GET /figures[?era=..]`
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

  let figures = match &params.era {
    Some(era) if corpus.era(era).is_none() => {
      return Err(Error::BadRequest(format!("unknown era \"{era}\"")));
    }
    Some(era) => corpus.figures_in_era(era),
    None => corpus.figures().iter().collect(),
  };

  let eras: Vec<(String, String)> = corpus
    .eras()
    .iter()
    .map(|e| (e.id.clone(), e.name.clone()))
    .collect();

  let body = html! {
    h1 { "Figures" }
    (filter_tabs("/figures", "era", &eras, params.era.as_deref(), &[]))
    (cards(figures.into_iter().map(figure_card).collect(),
      "No figures are recorded for this era."))
  };

  Ok(html(&headers, Page::new("Figures", Nav::Figures, body)))
}

/// `GET /figures/{id}`
pub async fn detail<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();
  let figure = corpus
    .figure(&id)
    .ok_or_else(|| Error::not_found("figure", &id, "/figures"))?;
  let events = corpus.events_for_figure(&figure.id);
  let documents = corpus.documents_by_author(&figure.id);
  let quotes = corpus.quotes_by_figure(&figure.id);
  let url = state.config.absolute(&format!("/figures/{id}"));

  let body = html! {
    article {
      h1 { (figure.name) }
      p.meta {
        @if let Some(title) = &figure.title { (title) " · " }
        @if let Some(era) = corpus.era(&figure.era_id) { (era_badge(era)) }
        @if let Some(tradition) = &figure.tradition { " · " (tradition) }
      }
      dl {
        @if let Some(born) = &figure.born {
          dt { "Born" } dd { (born.to_string()) }
        }
        @if let Some(died) = &figure.died {
          dt { "Died" } dd { (died.to_string()) }
        }
      }
      p { (figure.summary) }
    }
    section {
      h2 { "Events" }
      @if events.is_empty() {
        (empty_state("No events are recorded for this figure."))
      } @else {
        ol.timeline {
          @for event in &events {
            (timeline_row(event, corpus.era(&event.era_id)))
          }
        }
      }
    }
    section {
      h2 { "Writings" }
      (cards(
        documents.into_iter().map(|d| document_card(d, Some(figure))).collect(),
        "No writings are recorded for this figure.",
      ))
    }
    section {
      h2 { "Quotes" }
      (cards(
        quotes.into_iter().map(|q| quote_card(q, Some(figure))).collect(),
        "No quotes are recorded for this figure.",
      ))
    }
    (share(&url, &figure.name))
  };

  Ok(html(&headers, Page::new(figure.name.as_str(), Nav::Figures, body)))
}

#[cfg(test)]
mod tests {
  use axum::http::StatusCode;

  use crate::test_support::get_page;

  #[tokio::test]
  async fn era_tab_shows_only_that_era() {
    let (status, body) = get_page("/figures?era=reformation").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/figures/luther"));
    assert!(body.contains("/figures/calvin"));
    assert!(!body.contains("/figures/augustine"));
    assert!(body.contains("<a href=\"/figures?era=reformation\" class=\"active\">"));
  }

  #[tokio::test]
  async fn all_tab_lists_every_figure() {
    let (_, body) = get_page("/figures").await;
    for id in ["paul", "augustine", "aquinas", "mlk"] {
      assert!(body.contains(&format!("/figures/{id}\"")), "{id}");
    }
  }

  #[tokio::test]
  async fn detail_collects_events_writings_and_quotes() {
    let (status, body) = get_page("/figures/luther").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Martin Luther</h1>"));
    assert!(body.contains("10 November 1483"));
    assert!(body.contains("/events/diet-of-worms"));
    assert!(body.contains("/documents/small-catechism"));
    assert!(body.contains("/documents/ninety-five-theses-text"));
    assert!(body.contains("/quotes/here-i-stand"));
  }

  #[tokio::test]
  async fn detail_renders_empty_states() {
    let (_, body) = get_page("/figures/paul").await;
    assert!(body.contains("No writings are recorded for this figure."));
    assert!(body.contains("No quotes are recorded for this figure."));
  }
}
