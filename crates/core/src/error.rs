// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use slot_picker_domain::DomainError;

/// Errors that can occur while applying a command.
///
/// Toggles and navigation never fail; only option edits can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A command carried a value that violates a domain rule.
    InvalidCommand {
        /// The name of the rejected command.
        command: &'static str,
        /// The violated rule.
        source: DomainError,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommand { command, source } => {
                write!(f, "{command} rejected: {source}")
            }
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCommand { source, .. } => Some(source),
        }
    }
}
