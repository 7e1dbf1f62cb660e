//! Calendar month arithmetic.
//!
//! A [`Month`] is the billing period: the half-open date range from its
//! first day up to (but excluding) the first day of the following month.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ChargeError, Result};

/// A calendar year and month, e.g. `2020-08`.
///
/// Construction validates the month and precomputes the period bounds, so
/// every accessor is infallible.
///
/// # Examples
///
/// ```
/// use monthly_charge::billing::Month;
///
/// let august: Month = "2020-08".parse()?;
/// assert_eq!(august.days(), 31);
/// assert_eq!(august.to_string(), "2020-08");
/// # Ok::<(), monthly_charge::ChargeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    start: NaiveDate,
    end: NaiveDate,
    days: u32,
}

impl Month {
    /// Creates a month from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`ChargeError::InvalidMonth`] if `month` is outside `1..=12` or
    /// the year is outside the supported calendar range.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let invalid = || ChargeError::InvalidMonth(format!("{year:04}-{month:02}"));

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(invalid)?;
        let days = end.pred_opt().ok_or_else(invalid)?.day();

        Ok(Self { start, end, days })
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// Month number, 1 through 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// First day of the month (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day of the following month (exclusive end of this period).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days in the month.
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Returns true if `date` falls within this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for Month {
    type Err = ChargeError;

    /// Parses a `YYYY-MM` string.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ChargeError::InvalidMonth(s.to_owned());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Month {
    type Error = ChargeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}
