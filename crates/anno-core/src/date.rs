//! Historical dates, calendar days and centuries.
//!
//! Years are astronomical-ish: positive years are AD, negative years are BC.
//! There is no year zero in the corpus; if one appears it is read as 1 BC.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Leap year used to anchor [`DayOfYear`] so that February 29 exists.
const ANCHOR_YEAR: i32 = 2000;

const MONTH_NAMES: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December",
];

/// Full English name of a month, `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
  MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

// ─── Historical date ─────────────────────────────────────────────────────────

/// A year with optional month and day precision.
///
/// Ordering is by year, then month, then day; a missing part sorts before any
/// present one, so `"325"` comes before `"May 325"`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HistDate {
  pub year:  i32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub month: Option<u8>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub day:   Option<u8>,
}

impl HistDate {
  pub fn year(year: i32) -> Self {
    Self { year, month: None, day: None }
  }

  pub fn ymd(year: i32, month: u8, day: u8) -> Self {
    Self { year, month: Some(month), day: Some(day) }
  }

  /// Check month/day precision. Returns a human-readable reason on failure.
  pub fn check(&self) -> std::result::Result<(), String> {
    match (self.month, self.day) {
      (None, None) => Ok(()),
      (None, Some(_)) => Err("day given without a month".into()),
      (Some(m), None) if (1..=12).contains(&m) => Ok(()),
      (Some(m), None) => Err(format!("month {m} out of range")),
      (Some(m), Some(d)) => DayOfYear::new(m.into(), d.into())
        .map(|_| ())
        .map_err(|e| e.to_string()),
    }
  }

  /// The calendar day, if this date is precise to the day.
  pub fn day_of_year(&self) -> Option<DayOfYear> {
    DayOfYear::new(self.month?.into(), self.day?.into()).ok()
  }
}

impl fmt::Display for HistDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let month = self.month.and_then(|m| month_name(m.into()));
    match (self.day, month) {
      (Some(d), Some(m)) => write!(f, "{d} {m} ")?,
      (None, Some(m)) => write!(f, "{m} ")?,
      _ => {}
    }
    f.write_str(&year_label(self.year))
  }
}

/// `"325"` for AD years, `"4 BC"` for BC years.
pub fn year_label(year: i32) -> String {
  match year {
    y if y > 0 => y.to_string(),
    0 => "1 BC".to_string(),
    y => format!("{} BC", y.unsigned_abs()),
  }
}

// ─── Day of year ─────────────────────────────────────────────────────────────

/// A calendar day independent of the year, e.g. "13 November".
///
/// Always valid: February 29 is accepted, February 30 is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear(NaiveDate);

impl DayOfYear {
  pub fn new(month: u32, day: u32) -> Result<Self> {
    NaiveDate::from_ymd_opt(ANCHOR_YEAR, month, day)
      .map(Self)
      .ok_or(Error::InvalidDay { month, day })
  }

  /// The calendar day of `date`, dropping its year.
  pub fn from_date(date: NaiveDate) -> Self {
    // Every (month, day) of any year exists in the leap anchor year.
    Self::new(date.month(), date.day()).unwrap_or(Self(NaiveDate::MIN))
  }

  pub fn month(&self) -> u32 { self.0.month() }

  pub fn day(&self) -> u32 { self.0.day() }

  /// The following day. December 31 wraps to January 1.
  pub fn next(&self) -> Self {
    match self.0.succ_opt() {
      Some(d) if d.year() == ANCHOR_YEAR => Self(d),
      _ => Self::first(),
    }
  }

  /// The preceding day. January 1 wraps to December 31.
  pub fn prev(&self) -> Self {
    match self.0.pred_opt() {
      Some(d) if d.year() == ANCHOR_YEAR => Self(d),
      _ => Self::last(),
    }
  }

  /// Whether `date` is precise to the day and falls on this calendar day.
  pub fn matches(&self, date: &HistDate) -> bool {
    date.month.map(u32::from) == Some(self.month())
      && date.day.map(u32::from) == Some(self.day())
  }

  fn first() -> Self {
    Self(NaiveDate::from_yo_opt(ANCHOR_YEAR, 1).unwrap_or(NaiveDate::MIN))
  }

  fn last() -> Self {
    Self(NaiveDate::from_yo_opt(ANCHOR_YEAR, 366).unwrap_or(NaiveDate::MAX))
  }
}

impl fmt::Display for DayOfYear {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let month = month_name(self.month()).unwrap_or("?");
    write!(f, "{} {month}", self.day())
  }
}

impl Serialize for DayOfYear {
  fn serialize<S: serde::Serializer>(
    &self,
    serializer: S,
  ) -> std::result::Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct as _;
    let mut s = serializer.serialize_struct("DayOfYear", 2)?;
    s.serialize_field("month", &self.month())?;
    s.serialize_field("day", &self.day())?;
    s.end()
  }
}

// ─── Centuries ───────────────────────────────────────────────────────────────

/// The century a year falls in: 1..=100 is `1`, 101..=200 is `2`, and BC
/// years give negative centuries (-100..=-1 is `-1`).
pub fn century_of(year: i32) -> i32 {
  if year > 0 {
    (year - 1) / 100 + 1
  } else {
    // Year 0 reads as 1 BC.
    let bc = year.unsigned_abs().max(1);
    -(((bc - 1) / 100 + 1) as i32)
  }
}

/// `"4th century"`, `"1st century BC"`.
pub fn century_label(century: i32) -> String {
  let n = century.unsigned_abs();
  let suffix = match (n % 10, n % 100) {
    (_, 11..=13) => "th",
    (1, _) => "st",
    (2, _) => "nd",
    (3, _) => "rd",
    _ => "th",
  };
  if century < 0 {
    format!("{n}{suffix} century BC")
  } else {
    format!("{n}{suffix} century")
  }
}
