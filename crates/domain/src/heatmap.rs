// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Popularity counts used to weight cells for display.
//!
//! Heat never influences selection. It only decides how strongly a cell is
//! shaded, and weekend evenings are never shaded at all.

use crate::date_key::DateKey;
use crate::slot::SlotId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shading opacity of a cell with heat 1.
const BASE_OPACITY: f64 = 0.05;
/// Added opacity per unit of heat above 1.
const OPACITY_STEP: f64 = 0.03;
/// Upper bound on shading opacity.
const MAX_OPACITY: f64 = 0.70;

/// Per-date, per-slot popularity counts supplied by the inbound payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heatmap {
    counts: HashMap<DateKey, HashMap<SlotId, u32>>,
}

impl Heatmap {
    /// Creates an empty heatmap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the heat of a cell. Missing entries are 0.
    #[must_use]
    pub fn heat_for(&self, date: DateKey, slot: SlotId) -> u32 {
        self.counts
            .get(&date)
            .and_then(|slots| slots.get(&slot))
            .copied()
            .unwrap_or(0)
    }

    /// Number of dates with at least one recorded count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no counts are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(DateKey, SlotId, u32)> for Heatmap {
    fn from_iter<I: IntoIterator<Item = (DateKey, SlotId, u32)>>(iter: I) -> Self {
        let mut counts: HashMap<DateKey, HashMap<SlotId, u32>> = HashMap::new();
        for (date, slot, heat) in iter {
            counts.entry(date).or_default().insert(slot, heat);
        }
        Self { counts }
    }
}

/// Whether a cell is categorically left out of heat shading.
///
/// The two latest slots of Saturdays and Sundays are excluded. Selection is
/// unaffected.
#[must_use]
pub const fn is_weekend_excluded(date: DateKey, slot: SlotId) -> bool {
    date.is_weekend() && slot.is_late()
}

/// Shading opacity for a cell, or `None` if it is not shaded.
///
/// Opacity grows linearly from 0.05 at heat 1 and is capped at 0.70.
#[must_use]
pub fn shade_opacity(heat: u32, weekend_excluded: bool) -> Option<f64> {
    if heat == 0 || weekend_excluded {
        return None;
    }
    let opacity: f64 = OPACITY_STEP.mul_add(f64::from(heat - 1), BASE_OPACITY);
    Some(opacity.min(MAX_OPACITY))
}
