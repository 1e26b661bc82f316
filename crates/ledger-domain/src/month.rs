//! Calendar month keys and the month filter applied to ledger views.

use std::{error::Error, fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A `YYYY-MM` calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Builds a month, returning `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let raw = value.trim();
        let invalid = || ParseMonthError {
            input: raw.to_string(),
        };
        let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Month::new(year, month).ok_or_else(invalid)
    }
}

/// Returned when text is not a `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthError {
    input: String,
}

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a YYYY-MM month", self.input)
    }
}

impl Error for ParseMonthError {}

/// Restricts a ledger view to a single month, or shows everything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    /// Returns `true` when a record in `month` passes the filter.
    ///
    /// Records without a month only pass [`MonthFilter::All`].
    pub fn matches(&self, month: Option<Month>) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(selected) => month == Some(*selected),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(month) => fmt::Display::fmt(month, f),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = ParseMonthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(MonthFilter::All)
        } else {
            value.parse().map(MonthFilter::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_of_date_matches_iso_prefix() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let iso = date.format("%Y-%m-%d").to_string();
        assert_eq!(Month::of(date).to_string(), iso[..7]);
    }

    #[test]
    fn parses_valid_months_and_rejects_garbage() {
        assert_eq!("2023-11".parse::<Month>().unwrap(), Month::new(2023, 11).unwrap());
        assert!("2023-13".parse::<Month>().is_err());
        assert!("2023-1".parse::<Month>().is_err());
        assert!("November".parse::<Month>().is_err());
    }

    #[test]
    fn filter_all_accepts_undated_records() {
        assert!(MonthFilter::All.matches(None));
        let only = MonthFilter::Only(Month::new(2024, 1).unwrap());
        assert!(!only.matches(None));
        assert!(only.matches(Month::new(2024, 1)));
        assert!(!only.matches(Month::new(2024, 2)));
    }

    #[test]
    fn filter_parses_all_keyword() {
        assert_eq!("All".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "2024-05".parse::<MonthFilter>().unwrap().to_string(),
            "2024-05"
        );
    }
}
