// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// The pipeline stage at which a token failed.
///
/// Carried for diagnostics only. Callers treat every failure in one
/// direction the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// JSON serialization or parsing.
    Json,
    /// UTF-8 decoding of the decompressed bytes.
    Utf8,
    /// Gzip compression or decompression.
    Gzip,
    /// Base64 encoding or decoding.
    Base64,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = match self {
            Self::Json => "json",
            Self::Utf8 => "utf-8",
            Self::Gzip => "gzip",
            Self::Base64 => "base64",
        };
        write!(f, "{name}")
    }
}

/// Errors produced by the token codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The token could not be turned back into a payload.
    #[error("Failed to decompress data ({stage}: {reason})")]
    Decode {
        /// Where decoding stopped.
        stage: Stage,
        /// The underlying failure.
        reason: String,
    },
    /// The payload could not be turned into a token.
    #[error("Failed to compress data ({stage}: {reason})")]
    Encode {
        /// Where encoding stopped.
        stage: Stage,
        /// The underlying failure.
        reason: String,
    },
}

impl CodecError {
    pub(crate) fn decode(stage: Stage, reason: impl ToString) -> Self {
        Self::Decode {
            stage,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn encode(stage: Stage, reason: impl ToString) -> Self {
        Self::Encode {
            stage,
            reason: reason.to_string(),
        }
    }

    /// The stage at which the failure occurred.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Decode { stage, .. } | Self::Encode { stage, .. } => *stage,
        }
    }
}
