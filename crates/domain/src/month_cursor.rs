// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar_window::{CalendarWindow, add_months};
use time::Date;

/// The month currently shown to the user.
///
/// A cursor only ever points at a navigable month of its window. Requests to
/// move outside `[min_month, max_month]` leave it where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    month: Date,
}

impl MonthCursor {
    /// Places a cursor on the window's first month.
    #[must_use]
    pub const fn new(window: &CalendarWindow) -> Self {
        Self {
            month: window.min_month(),
        }
    }

    /// First day of the viewed month.
    #[must_use]
    pub const fn month(self) -> Date {
        self.month
    }

    /// Moves the cursor by `offset` months.
    ///
    /// Returns `true` if the cursor moved. An out-of-window target is a no-op.
    pub fn shift(&mut self, offset: i32, window: &CalendarWindow) -> bool {
        match add_months(self.month, offset) {
            Ok(target) if offset != 0 && window.contains_month(target) => {
                self.month = target;
                true
            }
            _ => false,
        }
    }

    /// Whether a previous month is navigable.
    #[must_use]
    pub fn can_go_back(self, window: &CalendarWindow) -> bool {
        self.month > window.min_month()
    }

    /// Whether a following month is navigable.
    #[must_use]
    pub fn can_go_forward(self, window: &CalendarWindow) -> bool {
        self.month < window.max_month()
    }

    /// Title for the viewed month, e.g. `"Mar 2025"`.
    #[must_use]
    pub fn title(self) -> String {
        let month: String = self.month.month().to_string().chars().take(3).collect();
        format!("{month} {}", self.month.year())
    }
}
