//! Self-describing integer records.
//!
//! Key material crosses storage and wire boundaries as a record: a varint
//! field count followed by that many fields, each a varint length plus the
//! big-endian magnitude bytes of one unsigned integer. The format is fixed
//! and versionless; field order carries the meaning.
//!
//! The decoder insists on canonical form (exact field count, minimal
//! magnitudes, no trailing bytes), so distinct keys always have distinct
//! encodings and byte comparison of records decides key equality.

use gitmesh_primitives::wire::{WireReader, WireWriter};
use gitmesh_primitives::PrimitivesError;

use crate::error::DecodeError;

/// Encode integer magnitudes into a record, preserving order.
///
/// Fields are expected in minimal form (see [`min_bytes`]).
pub(crate) fn encode_record(fields: &[&[u8]]) -> Vec<u8> {
    let payload: usize = fields.iter().map(|f| f.len() + 1).sum();
    let mut writer = WireWriter::with_capacity(1 + payload);
    writer.write_varint(fields.len() as u64);
    for field in fields {
        writer.write_varint(field.len() as u64);
        writer.write_bytes(field);
    }
    writer.into_bytes()
}

/// Decode a record into exactly `expected` integer magnitudes.
///
/// # Arguments
/// * `bytes` - The encoded record.
/// * `expected` - Required field count; any other count is rejected.
/// * `max_width` - Widest magnitude the curve admits, in bytes.
///
/// # Returns
/// The magnitudes in record order, or the [`DecodeError`] cause on the
/// first violation.
pub(crate) fn decode_record(
    bytes: &[u8],
    expected: u64,
    max_width: usize,
) -> Result<Vec<Vec<u8>>, DecodeError> {
    let mut reader = WireReader::new(bytes);
    let count = reader.read_varint().map_err(truncated)?;
    if count != expected {
        return Err(DecodeError::FieldCount {
            expected,
            got: count,
        });
    }

    let mut fields = Vec::with_capacity(expected as usize);
    for _ in 0..expected {
        let len = reader.read_varint().map_err(truncated)?;
        if len == 0 {
            return Err(DecodeError::EmptyField);
        }
        if len > max_width as u64 {
            return Err(DecodeError::FieldTooWide {
                max: max_width,
                got: len as usize,
            });
        }
        let magnitude = reader.read_bytes(len as usize).map_err(truncated)?;
        if len > 1 && magnitude[0] == 0 {
            return Err(DecodeError::NonMinimal);
        }
        fields.push(magnitude.to_vec());
    }

    if reader.remaining() > 0 {
        return Err(DecodeError::TrailingBytes(reader.remaining()));
    }
    Ok(fields)
}

/// Minimal big-endian magnitude of `bytes`: leading zero bytes trimmed.
///
/// Empty for the value zero, which no valid key field ever is.
pub(crate) fn min_bytes(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

fn truncated(_: PrimitivesError) -> DecodeError {
    DecodeError::Truncated
}
