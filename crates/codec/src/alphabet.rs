// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Base64 in the URL-safe, unpadded form used by tokens.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::{DecodeError, Engine as _};

/// Encodes bytes as unpadded URL-safe base64.
///
/// Equivalent to standard base64 with `+` mapped to `-`, `/` mapped to `_`
/// and the `=` padding stripped.
pub fn to_token(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes a token produced by [`to_token`].
///
/// The URL-safe characters are mapped back to the standard alphabet and the
/// padding restored before decoding, so padded and standard-alphabet input
/// is accepted too.
pub fn from_token(token: &str) -> Result<Vec<u8>, DecodeError> {
    let mut standard: String = token.replace('-', "+").replace('_', "/");
    let remainder: usize = standard.len() % 4;
    if remainder > 1 {
        standard.extend(std::iter::repeat_n('=', 4 - remainder));
    }
    STANDARD.decode(standard)
}
