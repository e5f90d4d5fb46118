// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-of-day slot identifiers.
//!
//! The slot table is shared by convention with the system that produces the
//! inbound payload. Ordinals and labels must not drift between the two.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display labels indexed by `ordinal - 1`.
const SLOT_LABELS: [&str; 7] = ["08:30", "10:20", "12:45", "14:35", "16:25", "18:50", "20:40"];

/// One of the seven bookable time slots of a day.
///
/// On the wire a slot is the string `"N.0"` where `N` is its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotId {
    ordinal: u8,
}

impl SlotId {
    /// Lowest valid ordinal.
    pub const MIN_ORDINAL: u8 = 1;
    /// Highest valid ordinal.
    pub const MAX_ORDINAL: u8 = 7;

    /// Every slot, ascending by ordinal.
    pub const ALL: [Self; 7] = [
        Self { ordinal: 1 },
        Self { ordinal: 2 },
        Self { ordinal: 3 },
        Self { ordinal: 4 },
        Self { ordinal: 5 },
        Self { ordinal: 6 },
        Self { ordinal: 7 },
    ];

    /// Creates a slot from its ordinal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSlotId` if `ordinal` is not in `1..=7`.
    pub fn new(ordinal: u8) -> Result<Self, DomainError> {
        if (Self::MIN_ORDINAL..=Self::MAX_ORDINAL).contains(&ordinal) {
            Ok(Self { ordinal })
        } else {
            Err(DomainError::InvalidSlotId(ordinal.to_string()))
        }
    }

    /// Returns the 1-based ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.ordinal
    }

    /// Returns the wall-clock label, e.g. `"08:30"` for the first slot.
    #[must_use]
    pub fn label(self) -> &'static str {
        SLOT_LABELS[usize::from(self.ordinal - 1)]
    }

    /// Returns the wire identifier, e.g. `"3.0"`.
    #[must_use]
    pub fn wire_id(self) -> String {
        format!("{}.0", self.ordinal)
    }

    /// Whether this is one of the two latest slots of the day.
    ///
    /// These slots are left unshaded on weekends.
    #[must_use]
    pub const fn is_late(self) -> bool {
        self.ordinal > Self::MAX_ORDINAL - 2
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.0", self.ordinal)
    }
}

impl FromStr for SlotId {
    type Err = DomainError;

    /// Accepts `"3"`, `"3.0"` and any other integral spelling of an ordinal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
        if !fraction.chars().all(|c| c == '0') {
            return Err(DomainError::InvalidSlotId(s.to_string()));
        }
        let ordinal: u8 = whole
            .parse()
            .map_err(|_| DomainError::InvalidSlotId(s.to_string()))?;
        Self::new(ordinal).map_err(|_| DomainError::InvalidSlotId(s.to_string()))
    }
}

impl TryFrom<String> for SlotId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotId> for String {
    fn from(slot: SlotId) -> Self {
        slot.wire_id()
    }
}
