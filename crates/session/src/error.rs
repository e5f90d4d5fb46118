// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the session boundary.

use slot_picker::CoreError;
use slot_picker_codec::CodecError;
use slot_picker_domain::DomainError;
use thiserror::Error;

/// Session-level errors.
///
/// The `Display` form of each variant is the single message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No inbound token was supplied.
    #[error("Error loading data: No data provided")]
    MissingInput,
    /// The inbound token could not be decoded.
    #[error("Error loading data: {0}")]
    Decode(#[source] CodecError),
    /// The outbound payload could not be encoded.
    #[error("Error saving data: {0}")]
    Encode(#[source] CodecError),
    /// The calendar window could not be computed from the current date.
    #[error("Error loading data: {0}")]
    Window(#[source] DomainError),
    /// A command was rejected. The session remains usable.
    #[error(transparent)]
    Command(#[from] CoreError),
}

impl SessionError {
    /// Whether the session cannot continue after this error.
    ///
    /// Startup and save failures are terminal; rejected commands are not.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Command(_))
    }
}
