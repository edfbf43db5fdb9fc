//! `/on-this-day`: events, births and deaths on one calendar day.
//!
//! Without parameters the page shows today. Previous/next links walk the
//! calendar and wrap at the year's ends, so navigation never fails.

use anno_core::{corpus::Corpus, date::DayOfYear};
use axum::{
  extract::{Query, State, rejection::QueryRejection},
  http::HeaderMap,
  response::Response,
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
  AppState,
  components::{cards, empty_state, event_card, figure_card},
  error::Error,
  layout::{Nav, Page},
  pages::html,
};

#[derive(Debug, Default, Deserialize)]
pub struct DayParams {
  pub month: Option<u32>,
  pub day:   Option<u32>,
}

impl DayParams {
  /// The requested day; today when neither part is given.
  pub fn resolve(&self, today: DayOfYear) -> Result<DayOfYear, Error> {
    match (self.month, self.day) {
      (None, None) => Ok(today),
      (Some(month), Some(day)) => Ok(DayOfYear::new(month, day)?),
      _ => Err(Error::BadRequest(
        "month and day must be given together".to_string(),
      )),
    }
  }
}

pub fn today() -> DayOfYear {
  DayOfYear::from_date(chrono::Local::now().date_naive())
}

pub fn day_path(day: DayOfYear) -> String {
  format!("/on-this-day?month={}&day={}", day.month(), day.day())
}

pub fn day_nav(day: DayOfYear) -> Markup {
  let (prev, next) = (day.prev(), day.next());
  html! {
    nav.day-nav aria-label="Days" {
      a rel="prev" href=(day_path(prev)) { "← " (prev.to_string()) }
      a rel="next" href=(day_path(next)) { (next.to_string()) " →" }
    }
  }
}

/// `GET /on-this-day[?month=..&day=..]`
pub async fn handler<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  query: Result<Query<DayParams>, QueryRejection>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let Query(params) = query?;
  let day = params.resolve(today())?;
  let corpus = state.corpus.as_ref();
  let otd = corpus.on_this_day(day);
  let title = format!("On this day: {day}");

  let body = html! {
    h1 { (title) }
    (day_nav(day))
    @if otd.is_empty() {
      (empty_state("Nothing in the corpus happened on this day."))
    } @else {
      @if !otd.events.is_empty() {
        section {
          h2 { "Events" }
          (cards(
            otd.events
              .iter()
              .map(|e| event_card(e, corpus.era(&e.era_id)))
              .collect(),
            "",
          ))
        }
      }
      @if !otd.births.is_empty() {
        section {
          h2 { "Born" }
          (cards(otd.births.iter().copied().map(figure_card).collect(), ""))
        }
      }
      @if !otd.deaths.is_empty() {
        section {
          h2 { "Died" }
          (cards(otd.deaths.iter().copied().map(figure_card).collect(), ""))
        }
      }
    }
  };

  Ok(html(&headers, Page::new(title.as_str(), Nav::OnThisDay, body)))
}
