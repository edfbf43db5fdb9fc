//! In-memory backend for the Anno Domini corpus.
//!
//! The corpus is read once from a JSON file, validated, indexed by id and
//! never written back. Cloning a [`MemoryCorpus`] is cheap; the data sits
//! behind an `Arc`.

mod index;
mod store;
mod validate;

pub mod error;

pub use error::{Error, Result};
pub use store::{Counts, MemoryCorpus};
