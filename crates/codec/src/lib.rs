// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reversible transport of JSON payloads through URL-length-bounded strings.
//!
//! ## Pipeline
//!
//! ```text
//! encode: value -> JSON text -> gzip -> base64 (URL-safe, unpadded)
//! decode: token -> base64 (re-padded) -> gunzip -> UTF-8 -> JSON -> value
//! ```
//!
//! ## Invariants
//!
//! - `decode(encode(x)) == x` for every JSON value `x`
//! - Tokens contain only `[A-Za-z0-9_-]`
//! - A failure at any stage yields one [`CodecError`]; partial values are never returned
//!
//! Compressed bytes are not guaranteed to be stable between runs. Only the
//! decoded value is.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod alphabet;
mod compression;
mod error;

#[cfg(test)]
mod tests;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub use error::{CodecError, Stage};

/// Encodes a payload into a URL-safe token.
///
/// # Errors
///
/// Returns `CodecError::Encode` if the payload cannot be serialized to JSON
/// or the compressor fails.
pub async fn encode<T: Serialize + Sync + ?Sized>(payload: &T) -> Result<String, CodecError> {
    let json: Vec<u8> =
        serde_json::to_vec(payload).map_err(|err| CodecError::encode(Stage::Json, err))?;

    let compressed: Vec<u8> = compression::gzip(&json)
        .await
        .map_err(|err| CodecError::encode(Stage::Gzip, err))?;

    let token: String = alphabet::to_token(&compressed);

    debug!(
        json_bytes = json.len(),
        compressed_bytes = compressed.len(),
        token_len = token.len(),
        "Encoded payload"
    );

    Ok(token)
}

/// Decodes a token produced by [`encode`] into a payload.
///
/// # Errors
///
/// Returns `CodecError::Decode` if the token is not valid base64, does not
/// hold a gzip stream, does not decompress to UTF-8, or does not parse as
/// JSON of the requested shape.
pub async fn decode<T: DeserializeOwned>(token: &str) -> Result<T, CodecError> {
    let compressed: Vec<u8> =
        alphabet::from_token(token).map_err(|err| CodecError::decode(Stage::Base64, err))?;

    let bytes: Vec<u8> = compression::gunzip(&compressed)
        .await
        .map_err(|err| CodecError::decode(Stage::Gzip, err))?;

    let text: String =
        String::from_utf8(bytes).map_err(|err| CodecError::decode(Stage::Utf8, err))?;

    let payload: T =
        serde_json::from_str(&text).map_err(|err| CodecError::decode(Stage::Json, err))?;

    debug!(
        token_len = token.len(),
        compressed_bytes = compressed.len(),
        json_bytes = text.len(),
        "Decoded payload"
    );

    Ok(payload)
}
