mod consts;
mod prelude;
mod types;

pub mod order;

pub use consts::*;
pub use order::{
    RMonthKey, by_r_group, r_month_order, sort_dates, sort_dates_in_place, within_group,
};
pub use types::{Day, Month, Year, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A complete calendar date: year, month and day, already validated.
///
/// The derived ordering is chronological (year, then month, then day).
/// For the month-name ordering see [`r_month_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for building a [`Date`] from numbers or text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error("Empty date string")]
    EmptyInput,
}

impl Date {
    /// Creates a date from a validated year and month plus a raw day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in that month.
    pub fn new(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw numbers, validating every component.
    ///
    /// # Errors
    /// Returns the `DateError` of the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(Year::new(year)?, Month::new(month)?, day)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Returns the components as plain numbers: (year, month, day)
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Whether this date falls in a month whose English name contains an 'r'.
    /// Depends only on the month.
    #[inline]
    pub const fn has_r(&self) -> bool {
        self.month.has_r()
    }
}

impl TryFrom<(u16, u8, u8)> for Date {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(year, month, day)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Strictly enforce delimiters: DATE_SEPARATOR for ISO,
        // MONTH_FIRST_SEPARATOR for month-first
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(DateError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let separator = if has_hyphen {
            DATE_SEPARATOR
        } else if has_slash {
            MONTH_FIRST_SEPARATOR
        } else {
            return Err(DateError::InvalidFormat(format!(
                "No separator found (expected YYYY-MM-DD or MM/DD/YYYY): {trimmed}"
            )));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        }

        // ISO is year-first, month-first puts the year last
        let (year, month, day) = if separator == DATE_SEPARATOR {
            (parts[0], parts[1], parts[2])
        } else {
            (parts[2], parts[0], parts[1])
        };

        Self::from_ymd(parse_u16(year)?, parse_u8(month)?, parse_u8(day)?)
    }
}

/// Components are plain ASCII digits; `str::parse` alone would also take a sign
fn digits_only(s: &str) -> Result<&str, DateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(s.to_owned()));
    }
    Ok(s)
}

fn parse_u16(s: &str) -> Result<u16, DateError> {
    digits_only(s)?
        .parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, DateError> {
    digits_only(s)?
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
