//! Calendar year-month used to key budgets and scope summaries.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// A calendar month, e.g. `2024-05`.
///
/// Internally the first day of the month, so ordering follows the calendar.
/// An expense belongs to a month when `first_day() <= date < next().first_day()`.
///
/// ```rust
/// use engine::Month;
///
/// let may: Month = "2024-05".parse().unwrap();
/// assert_eq!(may.to_string(), "2024-05");
/// assert_eq!(may.next().unwrap().to_string(), "2024-06");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Month(NaiveDate);

impl Month {
    /// Builds a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> ResultEngine<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| EngineError::InvalidMonth(format!("{year:04}-{month:02}")))
    }

    /// The month a date falls in.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        // Day 1 always exists for a valid date's year and month.
        Self(date - chrono::Days::new(u64::from(date.day0())))
    }

    /// The current month according to the local clock.
    #[must_use]
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1-based month number.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// First day of the month (inclusive lower bound).
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    /// The following month, `None` past the end of the supported calendar.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add_months(Months::new(1)).map(Self)
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }

    /// Storage key, same as `Display`.
    pub(crate) fn key(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!("{:04}-{:02}", self.0.year(), self.0.month());
        f.pad(&rendered)
    }
}

impl FromStr for Month {
    type Err = EngineError;

    /// Parses `YYYY-MM` (a single-digit month is accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || EngineError::InvalidMonth(format!("'{trimmed}' is not YYYY-MM"));

        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if month.is_empty() || month.len() > 2 || !month.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl From<Month> for String {
    fn from(value: Month) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Month {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
