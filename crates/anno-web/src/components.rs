//! Presentational components. Each renders one record, or one small piece
//! of page furniture, and knows nothing about routing or the corpus.

use anno_core::{
  date::year_label,
  feed::FeedItem,
  model::{Category, Document, Era, Event, FederatedSource, Figure, Quote},
};
use maud::{Markup, html};

// ─── Links ───────────────────────────────────────────────────────────────────

/// `base` with the present `params` appended as a percent-encoded query.
pub fn href(base: &str, params: &[(&str, Option<&str>)]) -> String {
  let query: Vec<String> = params
    .iter()
    .filter_map(|(k, v)| v.map(|v| format!("{k}={}", urlencoding::encode(v))))
    .collect();
  if query.is_empty() {
    base.to_string()
  } else {
    format!("{base}?{}", query.join("&"))
  }
}

pub fn topic_path(topic: &str) -> String {
  format!("/sources/topic/{}", urlencoding::encode(topic))
}

// ─── Badges ──────────────────────────────────────────────────────────────────

pub fn era_badge(era: &Era) -> Markup {
  html! {
    a.badge.era href=(format!("/eras/{}", era.id)) title=(era_range(era)) {
      (era.name)
    }
  }
}

pub fn kind_badge(kind: &str) -> Markup {
  html! { span.badge.kind { (kind) } }
}

pub fn era_range(era: &Era) -> String {
  format!("{}–{}", year_label(era.start_year), year_label(era.end_year))
}

// ─── Cards ───────────────────────────────────────────────────────────────────

pub fn event_card(event: &Event, era: Option<&Era>) -> Markup {
  html! {
    article.card.event {
      h3 { a href=(format!("/events/{}", event.id)) { (event.title) } }
      p.meta {
        (event.date.to_string())
        @if let Some(place) = &event.location { " · " (place) }
        @if let Some(era) = era { " " (era_badge(era)) }
      }
      p { (event.summary) }
    }
  }
}

pub fn figure_card(figure: &Figure) -> Markup {
  let lifespan = figure.lifespan();
  html! {
    article.card.figure {
      h3 { a href=(format!("/figures/{}", figure.id)) { (figure.name) } }
      p.meta {
        @if let Some(title) = &figure.title { (title) }
        @if figure.title.is_some() && !lifespan.is_empty() { " · " }
        (lifespan)
      }
      p { (figure.summary) }
    }
  }
}

pub fn document_card(doc: &Document, author: Option<&Figure>) -> Markup {
  html! {
    article.card.document {
      h3 { a href=(format!("/documents/{}", doc.id)) { (doc.title) } }
      p.meta {
        (kind_badge(&doc.kind)) " "
        @if let Some(author) = author {
          a href=(format!("/figures/{}", author.id)) { (author.name) } ", "
        }
        (year_label(doc.year))
      }
      p { (doc.summary) }
    }
  }
}

pub fn source_card(
  source: &FederatedSource,
  category: Option<&Category>,
) -> Markup {
  html! {
    article.card.source {
      h3 { a href=(format!("/sources/view/{}", source.id)) { (source.title) } }
      p.meta {
        @if let Some(category) = category {
          a href=(format!("/sources/{}", category.id)) { (category.name) }
        }
        @if let Some(publisher) = &source.publisher { " · " (publisher) }
      }
      p { (source.summary) }
      @if !source.topics.is_empty() {
        p.topics {
          @for topic in &source.topics {
            a.badge href=(topic_path(topic)) { (topic) } " "
          }
        }
      }
    }
  }
}

pub fn quote_card(quote: &Quote, figure: Option<&Figure>) -> Markup {
  html! {
    article.card.quote-card {
      blockquote.quote {
        p { a href=(format!("/quotes/{}", quote.id)) { "“" (quote.text) "”" } }
        @if let Some(figure) = figure {
          footer {
            "— " a href=(format!("/figures/{}", figure.id)) { (figure.name) }
            @if let Some(year) = quote.year { ", " (year_label(year)) }
          }
        }
      }
    }
  }
}

/// One line of the timeline: year, title, era.
pub fn timeline_row(event: &Event, era: Option<&Era>) -> Markup {
  html! {
    li.timeline-row {
      span.year { (year_label(event.date.year)) }
      a href=(format!("/events/{}", event.id)) { (event.title) }
      @if let Some(era) = era { " " (era_badge(era)) }
    }
  }
}

pub fn feed_item(item: &FeedItem) -> Markup {
  html! {
    article.card.feed-item {
      p.meta {
        (kind_badge(item.kind.as_str()))
        @if let Some(year) = item.year { " " (year_label(year)) }
      }
      h3 { a href=(item.path) { (item.title) } }
      p { (item.summary) }
    }
  }
}

// ─── Furniture ───────────────────────────────────────────────────────────────

pub struct Tab {
  pub label:  String,
  pub href:   String,
  pub active: bool,
}

pub fn tabs(label: &str, tabs: &[Tab]) -> Markup {
  html! {
    nav aria-label=(label) {
      ul.tabs {
        @for tab in tabs {
          li {
            a href=(tab.href) class=[tab.active.then_some("active")] {
              (tab.label)
            }
          }
        }
      }
    }
  }
}

/// An "All" tab followed by one tab per `(value, label)` option, each
/// linking to `base?param=value` while keeping the `keep` parameters.
pub fn filter_tabs(
  base: &str,
  param: &str,
  options: &[(String, String)],
  active: Option<&str>,
  keep: &[(&str, Option<&str>)],
) -> Markup {
  let mut list = vec![Tab {
    label:  "All".to_string(),
    href:   href(base, keep),
    active: active.is_none(),
  }];
  for (value, label) in options {
    let mut params = vec![(param, Some(value.as_str()))];
    params.extend_from_slice(keep);
    list.push(Tab {
      label:  label.clone(),
      href:   href(base, &params),
      active: active == Some(value.as_str()),
    });
  }
  tabs(param, &list)
}

pub fn empty_state(message: &str) -> Markup {
  html! { p.empty { (message) } }
}

pub fn cards(items: Vec<Markup>, empty: &str) -> Markup {
  html! {
    @if items.is_empty() {
      (empty_state(empty))
    } @else {
      div.cards { @for item in items { (item) } }
    }
  }
}

/// A copyable absolute link plus a mail-to link for a detail page.
pub fn share(url: &str, title: &str) -> Markup {
  let mailto = format!(
    "mailto:?subject={}&body={}",
    urlencoding::encode(title),
    urlencoding::encode(url)
  );
  html! {
    section.share {
      h2 { "Share" }
      input type="text" readonly value=(url) aria-label="Link to this page";
      p { a href=(mailto) { "Send by email" } }
    }
  }
}

#[cfg(test)]
mod tests {
  use anno_core::date::HistDate;

  use super::*;

  fn era() -> Era {
    Era {
      id:         "nicene".into(),
      name:       "Nicene".into(),
      start_year: 325,
      end_year:   451,
      summary:    String::new(),
    }
  }

  #[test]
  fn href_encodes_and_skips_missing() {
    assert_eq!(href("/timeline", &[]), "/timeline");
    assert_eq!(href("/timeline", &[("era", None)]), "/timeline");
    assert_eq!(
      href("/quotes", &[("topic", Some("grace & faith"))]),
      "/quotes?topic=grace%20%26%20faith"
    );
    assert_eq!(
      href("/timeline", &[("era", Some("nicene")), ("century", Some("4"))]),
      "/timeline?era=nicene&century=4"
    );
  }

  #[test]
  fn era_badge_links_to_era() {
    let html = era_badge(&era()).into_string();
    assert!(html.contains("href=\"/eras/nicene\""));
    assert!(html.contains("title=\"325–451\""));
    assert!(html.contains(">Nicene<"));
  }

  #[test]
  fn filter_tabs_mark_exactly_one_active() {
    let options = vec![
      ("creed".to_string(), "creed".to_string()),
      ("letter".to_string(), "letter".to_string()),
    ];
    let all = filter_tabs("/documents", "kind", &options, None, &[])
      .into_string();
    assert_eq!(all.matches("class=\"active\"").count(), 1);
    assert!(all.contains("<a href=\"/documents\" class=\"active\">All</a>"));

    let creed =
      filter_tabs("/documents", "kind", &options, Some("creed"), &[])
        .into_string();
    assert!(creed.contains(
      "<a href=\"/documents?kind=creed\" class=\"active\">creed</a>"
    ));
    assert_eq!(creed.matches("class=\"active\"").count(), 1);
  }

  #[test]
  fn filter_tabs_keep_other_filters() {
    let options = vec![("nicene".to_string(), "Nicene".to_string())];
    let html = filter_tabs(
      "/timeline",
      "era",
      &options,
      None,
      &[("century", Some("4"))],
    )
    .into_string();
    assert!(html.contains("href=\"/timeline?century=4\""));
    assert!(html.contains("href=\"/timeline?era=nicene&amp;century=4\""));
  }

  #[test]
  fn event_card_shows_date_place_and_era() {
    let event = Event {
      id:         "council-of-nicaea".into(),
      title:      "Council of Nicaea".into(),
      date:       HistDate::ymd(325, 5, 20),
      era_id:     "nicene".into(),
      figure_ids: vec![],
      location:   Some("Nicaea".into()),
      summary:    "First ecumenical council.".into(),
    };
    let html = event_card(&event, Some(&era())).into_string();
    assert!(html.contains("20 May 325 · Nicaea"));
    assert!(html.contains("href=\"/events/council-of-nicaea\""));
    assert!(html.contains("href=\"/eras/nicene\""));
  }

  #[test]
  fn empty_cards_render_the_empty_state() {
    let html = cards(vec![], "Nothing here.").into_string();
    assert_eq!(html, "<p class=\"empty\">Nothing here.</p>");
  }
}
