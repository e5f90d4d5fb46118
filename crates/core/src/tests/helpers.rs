// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{SelectionState, SessionState};
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use slot_picker_domain::{CalendarWindow, DateKey, OptionsConfig, SlotId};
use time::macros::date;

pub fn slot(ordinal: u8) -> SlotId {
    SlotId::new(ordinal).unwrap()
}

pub fn key(text: &str) -> DateKey {
    text.parse().unwrap()
}

/// A window opened on Saturday 15 March 2025.
pub fn create_test_window() -> CalendarWindow {
    CalendarWindow::compute(date!(2025 - 03 - 15)).unwrap()
}

pub fn create_test_state(window: &CalendarWindow) -> SessionState {
    SessionState::new(SelectionState::new(), OptionsConfig::default(), window)
}

/// Asserts that no date maps to an empty slot list and slots are strictly ascending.
pub fn assert_sparse_invariant(selection: &SelectionState) {
    for (date, slots) in selection.entries() {
        assert!(!slots.is_empty(), "{date} is present with no slots");
        let ordinals: Vec<u8> = slots.iter().map(|slot| slot.ordinal()).collect();
        assert!(
            ordinals.windows(2).all(|pair| pair[0] < pair[1]),
            "{date} slots are not strictly ascending: {ordinals:?}"
        );
    }

    let value: serde_json::Value = serde_json::to_value(selection).unwrap();
    for (date, slots) in value.as_object().unwrap() {
        assert!(
            !slots.as_array().unwrap().is_empty(),
            "{date} serialized with no slots"
        );
    }
}

/// Seeded generator so random toggle sequences are reproducible per seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform index in `0..bound`.
pub fn pick(rng: &mut StdRng, bound: usize) -> usize {
    Uniform::new(0, bound).unwrap().sample(rng)
}
