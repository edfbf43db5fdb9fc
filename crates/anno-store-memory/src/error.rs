//! Error type for `anno-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("reading corpus file: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("{kind} {id} has an invalid {field}: {reason}")]
  InvalidDate {
    kind:   &'static str,
    id:     String,
    field:  &'static str,
    reason: String,
  },

  #[error("era {0} ends before it starts")]
  InvalidEra(String),

  #[error("duplicate {kind} id: {id}")]
  DuplicateId { kind: &'static str, id: String },

  /// A record points at an id that does not exist in the target collection.
  #[error("{kind} {id}: {field} refers to missing {target} {missing}")]
  DanglingReference {
    kind:    &'static str,
    id:      String,
    field:   &'static str,
    target:  &'static str,
    missing: String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
