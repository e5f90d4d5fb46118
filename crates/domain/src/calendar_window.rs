// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The rolling window of dates a user may pick from.
//!
//! ## Invariants
//!
//! - The window starts at "today" (inclusive); no earlier date is eligible
//! - The window ends on the last day of the month three months after today's month
//! - Dates are contiguous and chronological
//! - Navigable months are `[min_month, max_month]`, both first-of-month dates

use crate::date_key::DateKey;
use crate::error::DomainError;
use time::{Date, Month};

/// Returns the first day of `date`'s month.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the date cannot be
/// represented, which only happens at the edges of the supported range.
pub fn first_of_month(date: Date) -> Result<Date, DomainError> {
    date.replace_day(1)
        .map_err(|err| DomainError::DateArithmeticOverflow {
            operation: format!("computing the first day of the month of {date}: {err}"),
        })
}

/// Returns the first day of the month `offset` months away from `date`'s month.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the resulting year is out
/// of range.
pub fn add_months(date: Date, offset: i32) -> Result<Date, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("moving {offset} months from {date}"),
    };

    let month_index: i32 = date
        .year()
        .checked_mul(12)
        .and_then(|months| months.checked_add(i32::from(u8::from(date.month())) - 1))
        .and_then(|months| months.checked_add(offset))
        .ok_or_else(overflow)?;

    let year: i32 = month_index.div_euclid(12);
    let month_number: u8 = u8::try_from(month_index.rem_euclid(12) + 1).map_err(|_| overflow())?;
    let month: Month = Month::try_from(month_number).map_err(|_| overflow())?;

    Date::from_calendar_date(year, month, 1).map_err(|_| overflow())
}

/// Returns the last day of `date`'s month.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` at the end of the supported range.
pub fn last_of_month(date: Date) -> Result<Date, DomainError> {
    add_months(date, 1)?
        .previous_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing the last day of the month of {date}"),
        })
}

/// The eligible dates for a session and the navigable month range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWindow {
    today: Date,
    dates: Vec<DateKey>,
    min_month: Date,
    max_month: Date,
}

impl CalendarWindow {
    /// How many months past the current one the window reaches.
    pub const MONTHS_AHEAD: i32 = 3;

    /// Computes the window for a session opened on `today`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the window would run
    /// past the supported calendar range.
    ///
    /// # Example
    ///
    /// ```text
    /// today     = 2025-03-15
    /// min_month = 2025-03-01
    /// max_month = 2025-06-01
    /// dates     = 15/03/2025 ..= 30/06/2025
    /// ```
    pub fn compute(today: Date) -> Result<Self, DomainError> {
        let min_month: Date = first_of_month(today)?;
        let max_month: Date = add_months(min_month, Self::MONTHS_AHEAD)?;
        let last_day: Date = last_of_month(max_month)?;

        let mut dates: Vec<DateKey> = Vec::new();
        let mut current: Date = today;
        while current <= last_day {
            dates.push(DateKey::new(current));
            let Some(next) = current.next_day() else {
                break;
            };
            current = next;
        }

        Ok(Self {
            today,
            dates,
            min_month,
            max_month,
        })
    }

    /// The date the window was computed from.
    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    /// Every eligible date, chronological.
    #[must_use]
    pub fn dates(&self) -> &[DateKey] {
        &self.dates
    }

    /// First day of the earliest navigable month.
    #[must_use]
    pub const fn min_month(&self) -> Date {
        self.min_month
    }

    /// First day of the latest navigable month.
    #[must_use]
    pub const fn max_month(&self) -> Date {
        self.max_month
    }

    /// Whether `date` is one of the eligible dates.
    #[must_use]
    pub fn contains_date(&self, date: DateKey) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Whether the month containing `month` may be navigated to.
    #[must_use]
    pub fn contains_month(&self, month: Date) -> bool {
        first_of_month(month)
            .is_ok_and(|first| first >= self.min_month && first <= self.max_month)
    }

    /// The eligible dates falling in `month`'s month and year, chronological.
    ///
    /// This is the scope of the column and whole-month toggles.
    #[must_use]
    pub fn dates_in_month(&self, month: Date) -> Vec<DateKey> {
        self.dates
            .iter()
            .copied()
            .filter(|date| date.is_in_month_of(month))
            .collect()
    }
}
