//! Calendar types for time-to-expiry derivation.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `days_to_expiry`: Whole calendar days until expiry, floored at zero
//! - `time_to_expiry`: ACT/365 year fraction used by the pricing model
//!
//! A uniform 365-day year is used everywhere; there is no business-day
//! adjustment.
//!
//! # Examples
//!
//! ```
//! use payoff_core::types::time::{days_to_expiry, time_to_expiry, Date};
//!
//! let today = Date::from_ymd(2024, 3, 1).unwrap();
//! let expiry = today.add_days(30);
//!
//! assert_eq!(days_to_expiry(today, expiry), 30);
//! assert!((time_to_expiry(30) - 30.0 / 365.0).abs() < 1e-15);
//! ```

use chrono::{Datelike, Duration, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Days per year for the ACT/365 convention.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing/formatting and day arithmetic.
///
/// # Examples
///
/// ```
/// use payoff_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use payoff_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use payoff_core::types::time::Date;
    ///
    /// assert!(Date::parse("2024-06-15").is_ok());
    /// assert!(Date::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the date `days` calendar days later (earlier when negative).
    ///
    /// Saturates at the date range limits of chrono.
    pub fn add_days(self, days: i64) -> Self {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Date)
            .unwrap_or(self)
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the signed number of days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Calendar days from `today` until `expiry`, floored at zero.
///
/// Both dates are taken at midnight, so the count is the plain day
/// difference; an expiry in the past yields `0`.
///
/// # Examples
///
/// ```
/// use payoff_core::types::time::{days_to_expiry, Date};
///
/// let today = Date::from_ymd(2024, 1, 10).unwrap();
/// let past = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(days_to_expiry(today, past), 0);
/// ```
pub fn days_to_expiry(today: Date, expiry: Date) -> u32 {
    let days = expiry - today;
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Converts a day count into years using the 365-day convention.
#[inline]
pub fn time_to_expiry(days: u32) -> f64 {
    f64::from(days) / DAYS_PER_YEAR
}
