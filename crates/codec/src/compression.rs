// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gzip framing over tokio I/O.

use async_compression::tokio::bufread::GzipDecoder;
use async_compression::tokio::write::GzipEncoder;
use std::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Compresses `bytes` into a single gzip member.
pub async fn gzip(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder: GzipEncoder<Vec<u8>> = GzipEncoder::new(Vec::new());
    encoder.write_all(bytes).await?;
    encoder.shutdown().await?;
    Ok(encoder.into_inner())
}

/// Decompresses a gzip stream.
///
/// An empty input is not a gzip stream and is rejected, as is any input
/// left over after the end of the stream.
pub async fn gunzip(bytes: &[u8]) -> io::Result<Vec<u8>> {
    if bytes.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "empty gzip stream",
        ));
    }

    let mut decoder: GzipDecoder<&[u8]> = GzipDecoder::new(bytes);
    let mut out: Vec<u8> = Vec::new();
    decoder.read_to_end(&mut out).await?;

    let trailing: usize = decoder.get_ref().len();
    if trailing > 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("trailing data after gzip stream ({trailing} bytes)"),
        ));
    }

    Ok(out)
}
