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

mod apply;
mod command;
mod error;
mod selection;
mod state;

#[cfg(test)]
mod tests;

use slot_picker_domain::{CalendarWindow, DateKey, Heatmap, SlotId};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use selection::SelectionState;
pub use state::{Outcome, SessionState, TransitionResult};

/// Returns the eligible dates of the month the state is viewing.
///
/// This is the scope of the column and whole-month toggles.
#[must_use]
pub fn visible_dates(window: &CalendarWindow, state: &SessionState) -> Vec<DateKey> {
    window.dates_in_month(state.cursor.month())
}

/// Heat lookup used for display weighting only.
///
/// Never consulted by any toggle.
#[must_use]
pub fn heat_for(heatmap: &Heatmap, date: DateKey, slot: SlotId) -> u32 {
    heatmap.heat_for(date, slot)
}
