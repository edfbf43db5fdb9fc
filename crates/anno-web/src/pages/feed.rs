//! `/feed` and `/feed.xml`.
//!
//! The HTML feed pages through the ordered items; each page ends with a
//! "load more" link carrying the next offset, and the shuffle seed when
//! shuffled, so following pages continue the same permutation.

use anno_core::{
  corpus::Corpus,
  feed::{FeedOrder, build_feed, order_feed, paginate},
};
use axum::{
  extract::{Query, State, rejection::QueryRejection},
  http::HeaderMap,
  response::Response,
};
use chrono::Datelike;
use maud::html;
use serde::Deserialize;

use crate::{
  AppState, atom,
  components::{Tab, empty_state, feed_item, href, tabs},
  error::Error,
  etag,
  layout::{Nav, Page},
  pages::html,
};

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
  pub order:  Option<String>,
  pub seed:   Option<u64>,
  pub offset: Option<usize>,
}

/// The shuffle seed when none is given: changes once a day.
fn daily_seed() -> u64 { u64::from(chrono::Local::now().ordinal()) }

/// `GET /feed[?order=..][&seed=..][&offset=..]`
pub async fn page<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
  query: Result<Query<FeedParams>, QueryRejection>,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let Query(params) = query?;
  let shuffled = params.order.as_deref() == Some("shuffled");
  let seed = params.seed.or_else(|| shuffled.then(daily_seed));
  let order = FeedOrder::parse(params.order.as_deref(), seed)?;

  let mut items = build_feed(state.corpus.as_ref());
  order_feed(&mut items, order);
  let page = paginate(
    &items,
    params.offset.unwrap_or(0),
    state.config.feed_page_size,
  );

  let seed_param = match order {
    FeedOrder::Shuffled { seed } => Some(seed.to_string()),
    FeedOrder::Chronological => None,
  };
  let more = page.next_offset.map(|next| {
    let next = next.to_string();
    href("/feed", &[
      ("order", shuffled.then_some("shuffled")),
      ("seed", seed_param.as_deref()),
      ("offset", Some(next.as_str())),
    ])
  });
  let order_tabs = [
    Tab {
      label:  "In order".to_string(),
      href:   "/feed".to_string(),
      active: !shuffled,
    },
    Tab {
      label:  "Shuffled".to_string(),
      href:   "/feed?order=shuffled".to_string(),
      active: shuffled,
    },
  ];

  let body = html! {
    h1 { "Feed" }
    (tabs("order", &order_tabs))
    p.meta {
      @if page.items.is_empty() {
        (page.total) " items"
      } @else {
        "Items " (page.offset + 1) "–" (page.offset + page.items.len())
        " of " (page.total)
      }
    }
    @if page.items.is_empty() {
      (empty_state("Nothing more to show."))
    } @else {
      div.feed { @for item in &page.items { (feed_item(item)) } }
    }
    @if let Some(more) = more {
      a.more href=(more) { "Load more" }
    }
  };

  Ok(html(&headers, Page::new("Feed", Nav::Feed, body)))
}

/// `GET /feed.xml`: the first page of the chronological feed as Atom.
pub async fn atom_feed<C>(
  State(state): State<AppState<C>>,
  headers: HeaderMap,
) -> Result<Response, Error>
where
  C: Corpus + Clone + 'static,
{
  let mut items = build_feed(state.corpus.as_ref());
  order_feed(&mut items, FeedOrder::Chronological);
  let page = paginate(&items, 0, state.config.feed_page_size);
  let xml = atom::render(&state.config, &page.items, state.loaded_at)?;
  Ok(etag::respond(&headers, "application/atom+xml; charset=utf-8", xml))
}
