//! `/timeline` and `/events/{id}`.

use std::collections::BTreeSet;

use anno_core::{
  corpus::{Corpus, EventQuery},
  date::{century_label, century_of},
};
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
    cards, empty_state, era_badge, figure_card, filter_tabs, share,
    timeline_row,
  },
  error::Error,
  layout::{Nav, Page},
  pages::html,
};

#[derive(Debug, Default, Deserialize)]
pub struct TimelineParams {
  pub era:     Option<String>,
  pub century: Option<i32>,
}

/// `GET /timeline[?era=..][&century=..]`
pub async fn timeline<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  query: Result<Query<TimelineParams>, QueryRejection>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let Query(params) = query?;
  let corpus = state.corpus.as_ref();

  if let Some(era) = &params.era
    && corpus.era(era).is_none()
  {
    return Err(Error::BadRequest(format!("unknown era \"{era}\"")));
  }

  let events = corpus.query_events(&EventQuery {
    era_id: params.era.clone(),
    century: params.century,
    ..EventQuery::default()
  });

  let eras: Vec<(String, String)> = corpus
    .eras()
    .iter()
    .map(|e| (e.id.clone(), e.name.clone()))
    .collect();
  let centuries: Vec<(String, String)> = corpus
    .events()
    .iter()
    .map(|e| century_of(e.date.year))
    .collect::<BTreeSet<_>>()
    .into_iter()
    .map(|c| (c.to_string(), century_label(c)))
    .collect();
  let century = params.century.map(|c| c.to_string());

  let body = html! {
    h1 { "Timeline" }
    p.meta { (events.len()) " events" }
    (filter_tabs("/timeline", "era", &eras, params.era.as_deref(),
      &[("century", century.as_deref())]))
    (filter_tabs("/timeline", "century", &centuries, century.as_deref(),
      &[("era", params.era.as_deref())]))
    @if events.is_empty() {
      (empty_state("No events match these filters."))
    } @else {
      ol.timeline {
        @for event in &events {
          (timeline_row(event, corpus.era(&event.era_id)))
        }
      }
    }
  };

  Ok(html(&headers, Page::new("Timeline", Nav::Timeline, body)))
}

/// `GET /events/{id}`
pub async fn detail<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let corpus = state.corpus.as_ref();
  let event = corpus
    .event(&id)
    .ok_or_else(|| Error::not_found("event", &id, "/timeline"))?;
  let era = corpus.era(&event.era_id);
  let figures = corpus.figures_for_event(event);
  let neighbours: Vec<_> = corpus
    .events_in_era(&event.era_id)
    .into_iter()
    .filter(|e| e.id != event.id)
    .collect();
  let url = state.config.absolute(&format!("/events/{id}"));

  let body = html! {
    article {
      h1 { (event.title) }
      p.meta {
        (event.date.to_string())
        @if let Some(place) = &event.location { " · " (place) }
        @if let Some(era) = era { " " (era_badge(era)) }
      }
      p { (event.summary) }
      @if let Some(day) = event.date.day_of_year() {
        p {
          a href=(format!("/on-this-day?month={}&day={}", day.month(), day.day())) {
            "What else happened on " (day.to_string())
          }
        }
      }
    }
    section {
      h2 { "Who was there" }
      (cards(figures.into_iter().map(figure_card).collect(),
        "No figures are recorded for this event."))
    }
    @if let Some(era) = era {
      section {
        h2 { "Also in the " (era.name) " era" }
        @if neighbours.is_empty() {
          (empty_state("Nothing else is recorded for this era."))
        } @else {
          ol.timeline {
            @for e in &neighbours { (timeline_row(e, None)) }
          }
        }
      }
    }
    (share(&url, &event.title))
  };

  Ok(html(&headers, Page::new(event.title.as_str(), Nav::Timeline, body)))
}
