// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Outcome, SessionState, TransitionResult};
use crate::visible_dates;
use slot_picker_domain::{CalendarWindow, DateKey, DomainError, SlotId};
use tracing::{debug, warn};

/// Applies a command to the current state, producing a new state.
///
/// Column and month toggles are scoped to the eligible dates of the month the
/// cursor is on. Row and month toggles cover every slot.
///
/// # Arguments
///
/// * `window` - The calendar window of the session
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and whether it changed
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if an option edit carries a value below 1. The state is
/// left untouched in that case.
pub fn apply(
    window: &CalendarWindow,
    state: &SessionState,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    let mut new_state: SessionState = state.clone();

    let outcome: Outcome = match command {
        Command::ToggleCell { date, slot } => {
            new_state.selection.toggle_cell(date, slot);
            Outcome::Changed
        }
        Command::ToggleRow { date } => {
            new_state.selection.toggle_row(date, &SlotId::ALL);
            Outcome::Changed
        }
        Command::ToggleColumn { slot } => {
            let scope: Vec<DateKey> = visible_dates(window, state);
            new_state.selection.toggle_column(slot, &scope);
            Outcome::Changed
        }
        Command::ToggleMonth => {
            let scope: Vec<DateKey> = visible_dates(window, state);
            new_state.selection.toggle_all(&SlotId::ALL, &scope);
            Outcome::Changed
        }
        Command::ChangeMonth { offset } => {
            if new_state.cursor.shift(offset, window) {
                Outcome::Changed
            } else {
                warn!(
                    offset,
                    month = %state.cursor.month(),
                    "Ignoring navigation outside the calendar window"
                );
                Outcome::Ignored
            }
        }
        Command::ToggleOption { flag } => {
            new_state.options.toggle(flag);
            Outcome::Changed
        }
        Command::SetDailyLessonLimit { limit } => {
            new_state
                .options
                .set_daily_lesson_limit(limit)
                .map_err(|err| rejected(command, err))?;
            Outcome::Changed
        }
        Command::SetCreditsPerSlot { credits } => {
            new_state
                .options
                .set_credits_per_slot(credits)
                .map_err(|err| rejected(command, err))?;
            Outcome::Changed
        }
    };

    debug!(
        command = command.name(),
        ?outcome,
        selected_dates = new_state.selection.date_count(),
        selected_cells = new_state.selection.cell_count(),
        "Applied command"
    );

    Ok(TransitionResult { new_state, outcome })
}

fn rejected(command: Command, source: DomainError) -> CoreError {
    warn!(command = command.name(), %source, "Rejected command");
    CoreError::InvalidCommand {
        command: command.name(),
        source,
    }
}
