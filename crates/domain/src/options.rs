// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Scheduling preferences carried alongside the selection.
///
/// Both counters are at least 1. Every field has a default that applies when
/// the inbound payload leaves it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Stop booking once a single slot has been obtained.
    pub stop_after_one_slot: bool,
    /// Stop booking at midnight.
    pub stop_at_midnight: bool,
    /// Only book slots adjacent to another booked slot.
    pub back_to_back_only: bool,
    /// Never book on the current day.
    pub exclude_current_day: bool,
    /// Maximum lessons per day.
    pub daily_lesson_limit: u32,
    /// Credits spent per slot.
    pub credits_per_slot: u32,
}

impl OptionsConfig {
    /// Default for both counters.
    pub const DEFAULT_COUNT: u32 = 1;

    /// Returns the value of a boolean option.
    #[must_use]
    pub const fn flag(&self, flag: OptionFlag) -> bool {
        match flag {
            OptionFlag::StopAfterOneSlot => self.stop_after_one_slot,
            OptionFlag::StopAtMidnight => self.stop_at_midnight,
            OptionFlag::BackToBackOnly => self.back_to_back_only,
            OptionFlag::ExcludeCurrentDay => self.exclude_current_day,
        }
    }

    /// Flips a boolean option.
    pub const fn toggle(&mut self, flag: OptionFlag) {
        match flag {
            OptionFlag::StopAfterOneSlot => self.stop_after_one_slot = !self.stop_after_one_slot,
            OptionFlag::StopAtMidnight => self.stop_at_midnight = !self.stop_at_midnight,
            OptionFlag::BackToBackOnly => self.back_to_back_only = !self.back_to_back_only,
            OptionFlag::ExcludeCurrentDay => {
                self.exclude_current_day = !self.exclude_current_day;
            }
        }
    }

    /// Sets the daily lesson limit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOptionValue` if `limit` is 0.
    pub fn set_daily_lesson_limit(&mut self, limit: u32) -> Result<(), DomainError> {
        self.daily_lesson_limit = validate_count("daily_lesson_limit", limit)?;
        Ok(())
    }

    /// Sets the credits spent per slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOptionValue` if `credits` is 0.
    pub fn set_credits_per_slot(&mut self, credits: u32) -> Result<(), DomainError> {
        self.credits_per_slot = validate_count("credits_per_slot", credits)?;
        Ok(())
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            stop_after_one_slot: false,
            stop_at_midnight: false,
            back_to_back_only: false,
            exclude_current_day: false,
            daily_lesson_limit: Self::DEFAULT_COUNT,
            credits_per_slot: Self::DEFAULT_COUNT,
        }
    }
}

const fn validate_count(field: &'static str, value: u32) -> Result<u32, DomainError> {
    if value == 0 {
        return Err(DomainError::InvalidOptionValue { field, value });
    }
    Ok(value)
}

/// The boolean options of [`OptionsConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionFlag {
    /// `stop_after_one_slot`
    StopAfterOneSlot,
    /// `stop_at_midnight`
    StopAtMidnight,
    /// `back_to_back_only`
    BackToBackOnly,
    /// `exclude_current_day`
    ExcludeCurrentDay,
}

impl OptionFlag {
    /// Every boolean option, in display order.
    pub const ALL: [Self; 4] = [
        Self::StopAfterOneSlot,
        Self::StopAtMidnight,
        Self::BackToBackOnly,
        Self::ExcludeCurrentDay,
    ];

    /// Returns the payload field name of this option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StopAfterOneSlot => "stop_after_one_slot",
            Self::StopAtMidnight => "stop_at_midnight",
            Self::BackToBackOnly => "back_to_back_only",
            Self::ExcludeCurrentDay => "exclude_current_day",
        }
    }
}

impl std::fmt::Display for OptionFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptionFlag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| DomainError::InvalidOptionFlag(s.to_string()))
    }
}
