// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{Datelike, NaiveDate};
use slot_picker_domain::DomainError;
use time::{Date, Month};

/// Source of "today" for computing the calendar window.
pub trait Clock: Send + Sync {
    /// Returns the current local calendar date.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be represented.
    fn today(&self) -> Result<Date, DomainError>;
}

/// Reads the host's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<Date, DomainError> {
        let now: NaiveDate = chrono::Local::now().date_naive();
        let invalid = || DomainError::DateArithmeticOverflow {
            operation: format!("converting local date {now}"),
        };

        let month: Month = u8::try_from(now.month())
            .ok()
            .and_then(|number| Month::try_from(number).ok())
            .ok_or_else(invalid)?;
        let day: u8 = u8::try_from(now.day()).map_err(|_| invalid())?;

        Date::from_calendar_date(now.year(), month, day).map_err(|_| invalid())
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Result<Date, DomainError> {
        Ok(self.0)
    }
}
