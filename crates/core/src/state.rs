// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::selection::SelectionState;
use slot_picker_domain::{CalendarWindow, MonthCursor, OptionsConfig};

/// The mutable part of a picking session.
///
/// The heatmap and calendar window are fixed for a session and live outside
/// this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// The picked `(date, slot)` pairs.
    pub selection: SelectionState,
    /// The scheduling preferences.
    pub options: OptionsConfig,
    /// The month currently shown.
    pub cursor: MonthCursor,
}

impl SessionState {
    /// Creates a state viewing the first month of `window`.
    #[must_use]
    pub const fn new(
        selection: SelectionState,
        options: OptionsConfig,
        window: &CalendarWindow,
    ) -> Self {
        Self {
            selection,
            options,
            cursor: MonthCursor::new(window),
        }
    }
}

/// Whether a command changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state was updated.
    Changed,
    /// The command was a silent no-op, e.g. navigation past the window edge.
    Ignored,
}

impl Outcome {
    /// Whether the state was updated.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: SessionState,
    /// Whether the transition changed anything.
    pub outcome: Outcome,
}
