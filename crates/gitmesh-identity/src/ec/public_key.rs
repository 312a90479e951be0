//! secp256k1 public keys.

use std::fmt;

use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::codec::min_bytes;
use crate::error::DecodeError;

/// Length of a compressed public key in bytes (prefix + 32-byte x-coordinate).
const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed public key in bytes (prefix + 32-byte x + 32-byte y).
const UNCOMPRESSED_LEN: usize = 65;

/// Width in bytes of a single point coordinate.
const COORDINATE_LEN: usize = 32;

/// SEC1 tag byte for an uncompressed point.
pub(crate) const UNCOMPRESSED_TAG: u8 = 0x04;

/// A secp256k1 public key.
///
/// Wraps a k256 `VerifyingKey`, so every value of this type is a point on
/// the curve. Construction from raw bytes or coordinates validates curve
/// membership.
#[derive(Clone, Debug)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a public key from SEC1-encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) forms.
    ///
    /// # Arguments
    /// * `bytes` - SEC1-encoded point.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or `PointNotOnCurve` if the bytes do
    /// not encode a curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let inner =
            VerifyingKey::from_sec1_bytes(bytes).map_err(|_| DecodeError::PointNotOnCurve)?;
        Ok(PublicKey { inner })
    }

    /// Create a public key from a hex-encoded SEC1 string.
    ///
    /// # Arguments
    /// * `hex_str` - Hex of a compressed (66-char) or uncompressed
    ///   (130-char) point.
    pub fn from_hex(hex_str: &str) -> Result<Self, DecodeError> {
        let bytes = hex::decode(hex_str).map_err(|e| DecodeError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Build a public key from big-endian coordinate magnitudes.
    ///
    /// The coordinates may be shorter than the full 32-byte width (leading
    /// zero bytes trimmed); they are left-padded before the curve check.
    ///
    /// # Arguments
    /// * `x` - Big-endian x-coordinate, at most 32 bytes.
    /// * `y` - Big-endian y-coordinate, at most 32 bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` if `(x, y)` lies on the curve.
    pub(crate) fn from_coordinates(x: &[u8], y: &[u8]) -> Result<Self, DecodeError> {
        for coord in [x, y] {
            if coord.len() > COORDINATE_LEN {
                return Err(DecodeError::FieldTooWide {
                    max: COORDINATE_LEN,
                    got: coord.len(),
                });
            }
        }
        let mut sec1 = [0u8; UNCOMPRESSED_LEN];
        sec1[0] = UNCOMPRESSED_TAG;
        sec1[1 + COORDINATE_LEN - x.len()..1 + COORDINATE_LEN].copy_from_slice(x);
        sec1[UNCOMPRESSED_LEN - y.len()..].copy_from_slice(y);
        Self::from_bytes(&sec1)
    }

    /// Serialize in compressed SEC1 format (33 bytes).
    ///
    /// The first byte is 0x02 (even y) or 0x03 (odd y), followed by the
    /// 32-byte x-coordinate.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize in uncompressed SEC1 format (65 bytes).
    ///
    /// The first byte is 0x04, followed by the 32-byte x and y coordinates.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize as a lowercase hex string (compressed form).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// The point's coordinates as minimal big-endian magnitudes.
    ///
    /// Leading zero bytes are trimmed, matching the record encoding and
    /// the address pipeline's point serialization. The result is never
    /// empty: no point with a zero coordinate lies on secp256k1.
    pub fn coordinates(&self) -> (Vec<u8>, Vec<u8>) {
        let point = self.inner.to_encoded_point(false);
        let bytes = point.as_bytes();
        let x = &bytes[1..1 + COORDINATE_LEN];
        let y = &bytes[1 + COORDINATE_LEN..];
        (min_bytes(x).to_vec(), min_bytes(y).to_vec())
    }

    /// Wrap a k256 verifying key.
    pub(crate) fn from_verifying_key(inner: &VerifyingKey) -> Self {
        PublicKey { inner: *inner }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
