//! Core types and the data-provider trait for the Anno Domini reference site.
//!
//! This crate has no HTTP or I/O dependencies. Every other
//! crate depends on it; the corpus itself is supplied by a backend that
//! implements [`corpus::Corpus`].

pub mod corpus;
pub mod date;
pub mod error;
pub mod feed;
pub mod model;
pub mod recommend;

pub use error::{Error, Result};
