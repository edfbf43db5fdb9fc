//! `/`: the landing page, in bare chrome.

use anno_core::{corpus::Corpus, recommend::recommend};
use axum::{extract::State, http::HeaderMap, response::Response};
use maud::html;

use crate::{
  AppState,
  components::{document_card, era_badge, timeline_row},
  error::Error,
  layout::{Chrome, Nav, Page, SITE_NAME},
  pages::{
    calendar::{day_path, today},
    html,
  },
};

/// `GET /`
pub async fn handler<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();
  let day = today();
  let otd = corpus.on_this_day(day);
  let picks = recommend(corpus.documents(), state.config.recommended_count);

  let body = html! {
    section.hero {
      h1 { (SITE_NAME) }
      p { "Two thousand years of church history: councils, confessors, creeds and the texts they left behind." }
      nav aria-label="Start here" {
        a href="/timeline" { "Timeline" }
        a href="/eras" { "Eras" }
        a href="/figures" { "Figures" }
        a href="/documents" { "Documents" }
        a href="/feed" { "Feed" }
        a href="/search" { "Search" }
      }
    }
    section {
      h2 { "On this day, " (day.to_string()) }
      @if otd.is_empty() {
        p.empty {
          "Nothing recorded for today. "
          a href=(day_path(day.next())) { "Try tomorrow" } "."
        }
      } @else {
        ul.timeline {
          @for event in &otd.events {
            (timeline_row(event, corpus.era(&event.era_id)))
          }
        }
        p {
          @if !otd.births.is_empty() { (otd.births.len()) " born · " }
          @if !otd.deaths.is_empty() { (otd.deaths.len()) " died · " }
          a href=(day_path(day)) { "See the whole day" }
        }
      }
    }
    section {
      h2 { "Eras" }
      p { @for era in corpus.eras() { (era_badge(era)) " " } }
    }
    @if !picks.is_empty() {
      section {
        h2 { "Where to start reading" }
        div.cards {
          @for pick in &picks {
            (document_card(
              pick.document,
              pick.document.author_id.as_deref().and_then(|a| corpus.figure(a)),
            ))
          }
        }
      }
    }
  };

  let page = Page::new(SITE_NAME, Nav::None, body).chrome(Chrome::Bare);
  Ok(html(&headers, page))
}
