//! `/eras` and `/eras/{id}`.

use anno_core::corpus::Corpus;
use axum::{
  extract::{Path, State},
  http::HeaderMap,
  response::Response,
};
use maud::html;

use crate::{
  AppState,
  components::{
    cards, document_card, empty_state, era_range, figure_card, share,
    timeline_row,
  },
  error::Error,
  layout::{Nav, Page},
  pages::html,
};

/// `GET /eras`
pub async fn list<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();

  let body = html! {
    h1 { "Eras" }
    @if corpus.eras().is_empty() {
      (empty_state("No eras are defined."))
    }
    div.cards {
      @for era in corpus.eras() {
        article.card.era {
          h3 { a href=(format!("/eras/{}", era.id)) { (era.name) } }
          p.meta { (era_range(era)) }
          p { (era.summary) }
          p.meta {
            (corpus.events_in_era(&era.id).len()) " events · "
            (corpus.figures_in_era(&era.id).len()) " figures · "
            (corpus.documents_in_era(&era.id).len()) " documents"
          }
        }
      }
    }
  };

  Ok(html(&headers, Page::new("Eras", Nav::Eras, body)))
}

/// `GET /eras/{id}`
pub async fn detail<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();
  let eras = corpus.eras();
  let pos = eras
    .iter()
    .position(|e| e.id == id)
    .ok_or_else(|| Error::not_found("era", &id, "/eras"))?;
  let era = &eras[pos];
  let prev = pos.checked_sub(1).and_then(|p| eras.get(p));
  let next = eras.get(pos + 1);

  let events = corpus.events_in_era(&era.id);
  let figures = corpus.figures_in_era(&era.id);
  let documents = corpus.documents_in_era(&era.id);
  let url = state.config.absolute(&format!("/eras/{id}"));

  let body = html! {
    article {
      h1 { (era.name) }
      p.meta { (era_range(era)) }
      p { (era.summary) }
      nav.day-nav aria-label="Neighbouring eras" {
        @if let Some(prev) = prev {
          a rel="prev" href=(format!("/eras/{}", prev.id)) { "← " (prev.name) }
        } @else { span {} }
        @if let Some(next) = next {
          a rel="next" href=(format!("/eras/{}", next.id)) { (next.name) " →" }
        }
      }
    }
    section {
      h2 { "Events" }
      @if events.is_empty() {
        (empty_state("No events are recorded for this era."))
      } @else {
        ol.timeline { @for e in &events { (timeline_row(e, None)) } }
      }
    }
    section {
      h2 { "Figures" }
      (cards(figures.into_iter().map(figure_card).collect(),
        "No figures are recorded for this era."))
    }
    section {
      h2 { "Documents" }
      (cards(
        documents
          .into_iter()
          .map(|d| {
            document_card(d, d.author_id.as_deref().and_then(|a| corpus.figure(a)))
          })
          .collect(),
        "No documents are recorded for this era.",
      ))
    }
    (share(&url, &era.name))
  };

  Ok(html(&headers, Page::new(era.name.as_str(), Nav::Eras, body)))
}
