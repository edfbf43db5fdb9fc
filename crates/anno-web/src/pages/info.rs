//! Static pages: `/about`, `/privacy`, `/terms`.

use axum::{http::HeaderMap, response::Response};
use maud::html;

use crate::{
  layout::{Nav, Page, SITE_NAME},
  pages::html,
};

pub async fn about(headers: HeaderMap) -> Response {
  let body = html! {
    h1 { "About " (SITE_NAME) }
    p {
      (SITE_NAME) " is a reader's guide to the history of the Christian "
      "church, from Pentecost to the present. It gathers events, the people "
      "who shaped them, the documents they wrote and the places those "
      "documents can be read today."
    }
    p {
      "Every page is generated from a single curated corpus. Dates are given "
      "to the precision the sources allow; where only a year is known, only "
      "a year is shown."
    }
    p {
      "The same data is available as JSON under "
      a href="/api/eras" { code { "/api" } }
      " and as an " a href="/feed.xml" { "Atom feed" } "."
    }
  };
  html(&headers, Page::new("About", Nav::None, body))
}

pub async fn privacy(headers: HeaderMap) -> Response {
  let body = html! {
    h1 { "Privacy" }
    p {
      "This site sets no cookies, runs no analytics and asks for no account. "
      "The server keeps ordinary request logs (path, status and timing) for "
      "operating the service."
    }
    p {
      "Links to federated sources lead to other sites, which have their own "
      "policies."
    }
  };
  html(&headers, Page::new("Privacy", Nav::None, body))
}

pub async fn terms(headers: HeaderMap) -> Response {
  let body = html! {
    h1 { "Terms" }
    p {
      "Summaries on this site are offered for study and may be quoted with "
      "attribution. Quotations remain the work of their authors and "
      "translators."
    }
    p {
      "External sources are listed by metadata only; their content belongs "
      "to their publishers."
    }
  };
  html(&headers, Page::new("Terms", Nav::None, body))
}
