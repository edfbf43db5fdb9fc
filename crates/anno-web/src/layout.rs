//! The layout shell: document head, header, sidebar navigation, footer.
//!
//! [`Chrome::Full`] wraps a page in the whole frame. On narrow screens the
//! sidebar becomes a drawer toggled by a hidden checkbox, so the shell works
//! without script. [`Chrome::Bare`] is the landing page's frame: no header or
//! sidebar, only the footer.

use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLESHEET: &str = include_str!("../assets/site.css");

pub const SITE_NAME: &str = "Anno Domini";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
  Full,
  Bare,
}

/// Which navigation entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
  Feed,
  Timeline,
  Figures,
  Documents,
  Eras,
  Sources,
  Quotes,
  OnThisDay,
  Search,
  None,
}

const NAV_ITEMS: &[(Nav, &str, &str)] = &[
  (Nav::Feed, "/feed", "Feed"),
  (Nav::Timeline, "/timeline", "Timeline"),
  (Nav::Eras, "/eras", "Eras"),
  (Nav::Figures, "/figures", "Figures"),
  (Nav::Documents, "/documents", "Documents"),
  (Nav::Quotes, "/quotes", "Quotes"),
  (Nav::Sources, "/sources", "Sources"),
  (Nav::OnThisDay, "/on-this-day", "On this day"),
  (Nav::Search, "/search", "Search"),
];

/// A page body plus everything the shell needs to frame it.
pub struct Page {
  title:  String,
  nav:    Nav,
  chrome: Chrome,
  body:   Markup,
}

impl Page {
  pub fn new(title: impl Into<String>, nav: Nav, body: Markup) -> Self {
    Self { title: title.into(), nav, chrome: Chrome::Full, body }
  }

  pub fn chrome(mut self, chrome: Chrome) -> Self {
    self.chrome = chrome;
    self
  }
}

pub fn render(page: Page) -> Markup {
  let class = match page.chrome {
    Chrome::Full => "chrome-full",
    Chrome::Bare => "chrome-bare",
  };

  html! {
    (DOCTYPE)
    html lang="en" {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (page.title) " · " (SITE_NAME) }
        link rel="alternate" type="application/atom+xml"
          title=(SITE_NAME) href="/feed.xml";
        style { (PreEscaped(STYLESHEET)) }
      }
      body class=(class) {
        @match page.chrome {
          Chrome::Full => {
            input #nav-drawer.drawer-toggle type="checkbox" aria-hidden="true";
            (header())
            div.shell {
              (sidebar(page.nav))
              main.content { (page.body) }
            }
          }
          Chrome::Bare => {
            main.landing { (page.body) }
          }
        }
        (footer())
      }
    }
  }
}

fn header() -> Markup {
  html! {
    header.topbar {
      label.drawer-button for="nav-drawer" aria-label="Toggle navigation" {
        "☰"
      }
      a.brand href="/" { (SITE_NAME) }
      form.topbar-search action="/search" method="get" role="search" {
        input type="search" name="q" placeholder="Search the corpus"
          aria-label="Search";
      }
    }
  }
}

fn sidebar(active: Nav) -> Markup {
  html! {
    nav.sidebar aria-label="Sections" {
      ul {
        @for (nav, href, label) in NAV_ITEMS {
          li {
            a href=(href) class=[(*nav == active).then_some("active")] {
              (label)
            }
          }
        }
      }
    }
  }
}

fn footer() -> Markup {
  html! {
    footer.footer {
      nav {
        a href="/about" { "About" }
        " · "
        a href="/privacy" { "Privacy" }
        " · "
        a href="/terms" { "Terms" }
        " · "
        a href="/feed.xml" { "Atom feed" }
        " · "
        a href="/api/eras" { "API" }
      }
      p { (SITE_NAME) ", a reader's guide to church history." }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rendered(chrome: Chrome, nav: Nav) -> String {
    let page = Page::new("Test", nav, html! { p { "body" } }).chrome(chrome);
    render(page).into_string()
  }

  #[test]
  fn full_chrome_has_drawer_sidebar_and_footer() {
    let html = rendered(Chrome::Full, Nav::Figures);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Test · Anno Domini</title>"));
    assert!(html.contains("id=\"nav-drawer\""));
    assert!(html.contains("class=\"sidebar\""));
    assert!(html.contains("<a href=\"/figures\" class=\"active\">"));
    assert!(html.contains("class=\"footer\""));
  }

  #[test]
  fn bare_chrome_drops_header_and_sidebar() {
    let html = rendered(Chrome::Bare, Nav::None);
    assert!(!html.contains("class=\"sidebar\""));
    assert!(!html.contains("class=\"topbar\""));
    assert!(html.contains("class=\"footer\""));
    assert!(html.contains("<p>body</p>"));
  }

  #[test]
  fn only_the_active_entry_is_highlighted() {
    let html = rendered(Chrome::Full, Nav::Timeline);
    assert_eq!(html.matches("class=\"active\"").count(), 1);
    let none = rendered(Chrome::Full, Nav::None);
    assert_eq!(none.matches("class=\"active\"").count(), 0);
  }
}
