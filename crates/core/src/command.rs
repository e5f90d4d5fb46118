// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use slot_picker_domain::{DateKey, OptionFlag, SlotId};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Row, column and month
/// scopes are resolved against the full slot set and the currently viewed
/// month when the command is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip a single cell.
    ToggleCell {
        /// The date of the cell.
        date: DateKey,
        /// The slot of the cell.
        slot: SlotId,
    },
    /// Flip every slot of one date.
    ToggleRow {
        /// The date whose slots are flipped.
        date: DateKey,
    },
    /// Flip one slot on every date of the viewed month.
    ToggleColumn {
        /// The slot flipped across the month.
        slot: SlotId,
    },
    /// Flip every cell of the viewed month.
    ToggleMonth,
    /// Move the viewed month.
    ChangeMonth {
        /// Months to move by; negative moves back.
        offset: i32,
    },
    /// Flip a boolean option.
    ToggleOption {
        /// The option to flip.
        flag: OptionFlag,
    },
    /// Set the maximum lessons per day.
    SetDailyLessonLimit {
        /// The new limit, at least 1.
        limit: u32,
    },
    /// Set the credits spent per slot.
    SetCreditsPerSlot {
        /// The new credit count, at least 1.
        credits: u32,
    },
}

impl Command {
    /// Stable name of the command kind, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToggleCell { .. } => "ToggleCell",
            Self::ToggleRow { .. } => "ToggleRow",
            Self::ToggleColumn { .. } => "ToggleColumn",
            Self::ToggleMonth => "ToggleMonth",
            Self::ChangeMonth { .. } => "ChangeMonth",
            Self::ToggleOption { .. } => "ToggleOption",
            Self::SetDailyLessonLimit { .. } => "SetDailyLessonLimit",
            Self::SetCreditsPerSlot { .. } => "SetCreditsPerSlot",
        }
    }

    /// Whether the command edits the selection (as opposed to options or navigation).
    #[must_use]
    pub const fn is_toggle(self) -> bool {
        matches!(
            self,
            Self::ToggleCell { .. }
                | Self::ToggleRow { .. }
                | Self::ToggleColumn { .. }
                | Self::ToggleMonth
        )
    }
}
