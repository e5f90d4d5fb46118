// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Weekday};

const DATE_KEY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year]");

/// Fixed width of a `DD/MM/YYYY` key.
const DATE_KEY_LEN: usize = 10;

/// A calendar date keyed as `DD/MM/YYYY`.
///
/// Keys order chronologically, not lexically: `01/04/2025` sorts after
/// `31/03/2025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey {
    date: Date,
}

impl DateKey {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self { date }
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(self) -> Date {
        self.date
    }

    /// Whether the date falls on a Saturday or Sunday.
    #[must_use]
    pub const fn is_weekend(self) -> bool {
        matches!(self.date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Whether the date lies in the same month and year as `month`.
    #[must_use]
    pub fn is_in_month_of(self, month: Date) -> bool {
        self.date.year() == month.year() && self.date.month() == month.month()
    }

    /// Short weekday name, e.g. `"Sat"`.
    #[must_use]
    pub fn weekday_label(self) -> String {
        self.date.weekday().to_string().chars().take(3).collect()
    }

    /// Day and short month name, e.g. `"15 Mar"`.
    #[must_use]
    pub fn full_date_label(self) -> String {
        let month: String = self.date.month().to_string().chars().take(3).collect();
        format!("{} {month}", self.date.day())
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.date.day(),
            u8::from(self.date.month()),
            self.date.year()
        )
    }
}

impl FromStr for DateKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The time parser tolerates variable-width years; keys are fixed width.
        if s.len() != DATE_KEY_LEN {
            return Err(DomainError::InvalidDateKey {
                value: s.to_string(),
                reason: format!("expected {DATE_KEY_LEN} characters in DD/MM/YYYY form"),
            });
        }

        let date: Date =
            Date::parse(s, DATE_KEY_FORMAT).map_err(|err| DomainError::InvalidDateKey {
                value: s.to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self { date })
    }
}

impl TryFrom<String> for DateKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        Self::new(date)
    }
}
