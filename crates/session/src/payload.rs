// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire shapes exchanged with the calling process.

use serde::{Deserialize, Serialize};
use slot_picker::SelectionState;
use slot_picker_domain::{Heatmap, OptionsConfig};
use tracing::warn;

/// The payload decoded from the inbound token.
///
/// Every field is optional. Absent or `null` fields fall back to defaults
/// when the session is started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundPayload {
    /// Previously saved selection.
    pub whitelisted_sessions: Option<SelectionState>,
    /// Popularity counts for display weighting.
    pub heatmap: Option<Heatmap>,
    /// See [`OptionsConfig::stop_after_one_slot`].
    pub stop_after_one_slot: Option<bool>,
    /// See [`OptionsConfig::stop_at_midnight`].
    pub stop_at_midnight: Option<bool>,
    /// See [`OptionsConfig::back_to_back_only`].
    pub back_to_back_only: Option<bool>,
    /// See [`OptionsConfig::exclude_current_day`].
    pub exclude_current_day: Option<bool>,
    /// See [`OptionsConfig::daily_lesson_limit`].
    pub daily_lesson_limit: Option<u32>,
    /// See [`OptionsConfig::credits_per_slot`].
    pub credits_per_slot: Option<u32>,
}

impl InboundPayload {
    /// Builds the options, applying defaults to missing fields.
    ///
    /// A counter of 0 is treated as missing and falls back to its default.
    #[must_use]
    pub fn options(&self) -> OptionsConfig {
        OptionsConfig {
            stop_after_one_slot: self.stop_after_one_slot.unwrap_or(false),
            stop_at_midnight: self.stop_at_midnight.unwrap_or(false),
            back_to_back_only: self.back_to_back_only.unwrap_or(false),
            exclude_current_day: self.exclude_current_day.unwrap_or(false),
            daily_lesson_limit: counter_or_default("daily_lesson_limit", self.daily_lesson_limit),
            credits_per_slot: counter_or_default("credits_per_slot", self.credits_per_slot),
        }
    }
}

fn counter_or_default(field: &'static str, value: Option<u32>) -> u32 {
    match value {
        Some(0) => {
            warn!(field, "Inbound counter is 0, using default");
            OptionsConfig::DEFAULT_COUNT
        }
        Some(count) => count,
        None => OptionsConfig::DEFAULT_COUNT,
    }
}

/// The action tag of an outbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Persist the selection and options.
    SaveConfig,
}

/// The payload encoded into the outbound token.
///
/// Serializes as
/// `{"action":"save_config","whitelisted_sessions":{...},"options":{...}}`
/// with dates in chronological order. The heatmap is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundPayload {
    /// Always [`Action::SaveConfig`].
    pub action: Action,
    /// The final selection.
    pub whitelisted_sessions: SelectionState,
    /// The final options.
    pub options: OptionsConfig,
}

impl OutboundPayload {
    /// Creates a save payload.
    #[must_use]
    pub const fn save(whitelisted_sessions: SelectionState, options: OptionsConfig) -> Self {
        Self {
            action: Action::SaveConfig,
            whitelisted_sessions,
            options,
        }
    }
}
