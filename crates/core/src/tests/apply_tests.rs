// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_state, create_test_window, key, slot};
use crate::{Command, CoreError, Outcome, SessionState, TransitionResult, apply};
use slot_picker_domain::{CalendarWindow, DateKey, DomainError, OptionFlag, SlotId};
use time::macros::date;

#[test]
fn test_apply_does_not_mutate_input_state() {
    let window: CalendarWindow = create_test_window();
    let state: SessionState = create_test_state(&window);
    let before: SessionState = state.clone();

    let result: TransitionResult = apply(
        &window,
        &state,
        Command::ToggleCell {
            date: key("17/03/2025"),
            slot: slot(2),
        },
    )
    .unwrap();

    assert_eq!(state, before);
    assert_eq!(result.outcome, Outcome::Changed);
    assert!(result.new_state.selection.contains(key("17/03/2025"), slot(2)));
}

#[test]
fn test_toggle_row_command_covers_all_slots() {
    let window: CalendarWindow = create_test_window();
    let state: SessionState = create_test_state(&window);

    let result: TransitionResult =
        apply(&window, &state, Command::ToggleRow { date: key("15/03/2025") }).unwrap();

    assert_eq!(
        result.new_state.selection.slots_for(key("15/03/2025")),
        SlotId::ALL.to_vec()
    );
}

#[test]
fn test_toggle_column_is_scoped_to_viewed_month() {
    let window: CalendarWindow = create_test_window();
    let state: SessionState = create_test_state(&window);

    let result: TransitionResult =
        apply(&window, &state, Command::ToggleColumn { slot: slot(5) }).unwrap();

    let march: Vec<DateKey> = window.dates_in_month(date!(2025 - 03 - 01));
    assert_eq!(result.new_state.selection.date_count(), march.len());
    for (date, slots) in result.new_state.selection.entries() {
        assert!(date.is_in_month_of(date!(2025 - 03 - 01)));
        assert_eq!(slots.len(), 1);
    }
}

#[test]
fn test_toggle_month_follows_cursor() {
    let window: CalendarWindow = create_test_window();
    let state: SessionState = create_test_state(&window);

    let moved: TransitionResult =
        apply(&window, &state, Command::ChangeMonth { offset: 2 }).unwrap();
    let toggled: TransitionResult =
        apply(&window, &moved.new_state, Command::ToggleMonth).unwrap();

    let may: Vec<DateKey> = window.dates_in_month(date!(2025 - 05 - 01));
    assert_eq!(toggled.new_state.selection.date_count(), may.len());
    assert_eq!(
        toggled.new_state.selection.cell_count(),
        may.len() * SlotId::ALL.len()
    );

    let restored: TransitionResult =
        apply(&window, &toggled.new_state, Command::ToggleMonth).unwrap();
    assert!(restored.new_state.selection.is_empty());
}

#[test]
fn test_navigation_outside_window_is_ignored() {
    let window: CalendarWindow = create_test_window();
    let state: SessionState = create_test_state(&window);

    let back: TransitionResult =
        apply(&window, &state, Command::ChangeMonth { offset: -1 }).unwrap();
    assert_eq!(back.outcome, Outcome::Ignored);
    assert_eq!(back.new_state, state);

    let far: TransitionResult =
        apply(&window, &state, Command::ChangeMonth { offset: 4 }).unwrap();
    assert_eq!(far.outcome, Outcome::Ignored);
    assert_eq!(far.new_state.cursor.month(), window.min_month());

    let last: TransitionResult =
        apply(&window, &state, Command::ChangeMonth { offset: 3 }).unwrap();
    assert_eq!(last.outcome, Outcome::Changed);
    assert_eq!(last.new_state.cursor.month(), window.max_month());

    let past_last: TransitionResult =
        apply(&window, &last.new_state, Command::ChangeMonth { offset: 1 }).unwrap();
    assert_eq!(past_last.outcome, Outcome::Ignored);
    assert_eq!(past_last.new_state.cursor.month(), window.max_month());
}

#[test]
fn test_toggle_option_command() {
    let window: CalendarWindow = create_test_window();
    let state: SessionState = create_test_state(&window);

    let result: TransitionResult = apply(
        &window,
        &state,
        Command::ToggleOption {
            flag: OptionFlag::StopAtMidnight,
        },
    )
    .unwrap();

    assert!(result.new_state.options.stop_at_midnight);
    assert_eq!(result.new_state.selection, state.selection);
}

#[test]
fn test_set_counters() {
    let window: CalendarWindow = create_test_window();
    let state: SessionState = create_test_state(&window);

    let limited: TransitionResult =
        apply(&window, &state, Command::SetDailyLessonLimit { limit: 3 }).unwrap();
    let credited: TransitionResult = apply(
        &window,
        &limited.new_state,
        Command::SetCreditsPerSlot { credits: 2 },
    )
    .unwrap();

    assert_eq!(credited.new_state.options.daily_lesson_limit, 3);
    assert_eq!(credited.new_state.options.credits_per_slot, 2);
}

#[test]
fn test_zero_counter_is_rejected() {
    let window: CalendarWindow = create_test_window();
    let state: SessionState = create_test_state(&window);

    let result: Result<TransitionResult, CoreError> =
        apply(&window, &state, Command::SetDailyLessonLimit { limit: 0 });

    assert_eq!(
        result,
        Err(CoreError::InvalidCommand {
            command: "SetDailyLessonLimit",
            source: DomainError::InvalidOptionValue {
                field: "daily_lesson_limit",
                value: 0,
            },
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "SetDailyLessonLimit rejected: Invalid value 0 for option 'daily_lesson_limit'. Must be at least 1"
    );
}

#[test]
fn test_cell_toggle_outside_window_is_still_applied() {
    let window: CalendarWindow = create_test_window();
    let state: SessionState = create_test_state(&window);

    // Inbound selections may carry dates that have since left the window.
    let result: TransitionResult = apply(
        &window,
        &state,
        Command::ToggleCell {
            date: key("01/01/2025"),
            slot: slot(1),
        },
    )
    .unwrap();

    assert!(result.new_state.selection.contains(key("01/01/2025"), slot(1)));
}
