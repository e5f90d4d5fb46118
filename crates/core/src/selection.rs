// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The sparse `date -> slots` selection and its toggle operations.
//!
//! ## Invariants
//!
//! - A date is present iff at least one of its slots is selected
//! - Slots of a date are ascending by ordinal and free of duplicates
//! - Dates iterate in chronological order
//!
//! Every toggle is an involution: applying it twice with the same arguments
//! restores the original selection. Row, column and month toggles flip each
//! cell independently; they never clear or fill wholesale.

use serde::{Deserialize, Serialize};
use slot_picker_domain::{DateKey, SlotId};
use std::collections::{BTreeMap, BTreeSet};

type Entries = BTreeMap<DateKey, BTreeSet<SlotId>>;

/// The set of `(date, slot)` pairs the user has picked.
///
/// Serializes as `{"DD/MM/YYYY": ["1.0", "3.0"], ...}` with dates in
/// chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Entries", into = "Entries")]
pub struct SelectionState {
    entries: Entries,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of dates with at least one selected slot.
    #[must_use]
    pub fn date_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of selected `(date, slot)` pairs.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Whether `slot` is selected on `date`.
    #[must_use]
    pub fn contains(&self, date: DateKey, slot: SlotId) -> bool {
        self.entries
            .get(&date)
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// The selected slots of `date`, ascending. Empty if none.
    #[must_use]
    pub fn slots_for(&self, date: DateKey) -> Vec<SlotId> {
        self.entries
            .get(&date)
            .map(|slots| slots.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Iterates dates chronologically with their ascending slots.
    pub fn entries(&self) -> impl Iterator<Item = (DateKey, &BTreeSet<SlotId>)> {
        self.entries.iter().map(|(date, slots)| (*date, slots))
    }

    /// Flips membership of `slot` on `date`.
    pub fn toggle_cell(&mut self, date: DateKey, slot: SlotId) {
        let slots: &mut BTreeSet<SlotId> = self.entries.entry(date).or_default();
        if !slots.remove(&slot) {
            slots.insert(slot);
        }
        if slots.is_empty() {
            self.entries.remove(&date);
        }
    }

    /// Flips every slot in `slots` on a single date.
    pub fn toggle_row(&mut self, date: DateKey, slots: &[SlotId]) {
        for slot in slots {
            self.toggle_cell(date, *slot);
        }
    }

    /// Flips one slot on every date in `dates`.
    pub fn toggle_column(&mut self, slot: SlotId, dates: &[DateKey]) {
        for date in dates {
            self.toggle_cell(*date, slot);
        }
    }

    /// Flips every `(date, slot)` pair of `dates × slots`.
    pub fn toggle_all(&mut self, slots: &[SlotId], dates: &[DateKey]) {
        for date in dates {
            self.toggle_row(*date, slots);
        }
    }
}

impl From<Entries> for SelectionState {
    /// Adopts externally supplied entries, dropping dates with no slots.
    fn from(mut entries: Entries) -> Self {
        entries.retain(|_, slots| !slots.is_empty());
        Self { entries }
    }
}

impl From<SelectionState> for Entries {
    fn from(state: SelectionState) -> Self {
        state.entries
    }
}

impl FromIterator<(DateKey, SlotId)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (DateKey, SlotId)>>(iter: I) -> Self {
        let mut entries: Entries = BTreeMap::new();
        for (date, slot) in iter {
            entries.entry(date).or_default().insert(slot);
        }
        Self { entries }
    }
}
