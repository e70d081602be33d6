//! `WebDAV` XML parsing.
//!
//! Multistatus bodies are read with scoped pattern matching over the
//! document text rather than a full XML parser, so that the minor
//! markup differences between servers (`D:` vs `d:` prefixes, extra
//! attributes, missing optional properties) never fail a listing.

pub mod multistatus;

use std::io::Read;

use crate::error::RfcResult;

pub use multistatus::{MultistatusParser, parse_multistatus};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads a complete multistatus body from `reader`.
///
/// ## Summary
/// Collects the bytes, drops a leading UTF-8 byte order mark and
/// validates the remainder as UTF-8.
///
/// ## Errors
/// Returns an error if reading fails or the body is not valid UTF-8.
#[tracing::instrument(skip(reader))]
pub fn read_document(mut reader: impl Read) -> RfcResult<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }

    tracing::debug!(bytes = bytes.len(), "Read multistatus body");

    Ok(String::from_utf8(bytes)?)
}
