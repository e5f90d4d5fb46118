// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar_window;
mod date_key;
mod error;
mod heatmap;
mod month_cursor;
mod options;
mod slot;

#[cfg(test)]
mod tests;

pub use calendar_window::{CalendarWindow, add_months, first_of_month, last_of_month};
pub use date_key::DateKey;
pub use error::DomainError;
pub use heatmap::{Heatmap, is_weekend_excluded, shade_opacity};
pub use month_cursor::MonthCursor;
pub use options::{OptionFlag, OptionsConfig};
pub use slot::SlotId;
