// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or validating domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A slot identifier does not name one of the seven known slots.
    InvalidSlotId(String),
    /// A date key is not a real calendar date in `DD/MM/YYYY` form.
    InvalidDateKey {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// An option value is outside its permitted range.
    InvalidOptionValue {
        /// The option field name.
        field: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// An option name does not match any boolean option.
    InvalidOptionFlag(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlotId(value) => write!(f, "Invalid slot id: '{value}'"),
            Self::InvalidDateKey { value, reason } => {
                write!(f, "Invalid date key '{value}': {reason}")
            }
            Self::InvalidOptionValue { field, value } => {
                write!(f, "Invalid value {value} for option '{field}'. Must be at least 1")
            }
            Self::InvalidOptionFlag(name) => write!(f, "Unknown option: '{name}'"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
