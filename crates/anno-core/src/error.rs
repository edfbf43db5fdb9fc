//! Error types for `anno-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid day of year: month {month}, day {day}")]
  InvalidDay { month: u32, day: u32 },

  #[error("invalid date on {record}: {reason}")]
  InvalidDate { record: String, reason: String },

  #[error("unknown feed order: {0:?}")]
  UnknownFeedOrder(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
