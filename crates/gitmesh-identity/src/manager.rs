//! Key pair lifecycle: generation, record serialization, and equality.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::codec;
use crate::curve::Curve;
use crate::ec::{KeyPair, PrivateKey, PublicKey};
use crate::error::IdentityError;

/// Number of integer fields in a private key record: x, y, d.
const PRIVATE_FIELDS: u64 = 3;

/// Number of integer fields in a public key record: x, y.
const PUBLIC_FIELDS: u64 = 2;

/// Generates identity key pairs and moves them through the record encoding.
///
/// A manager is constructed for one [`Curve`] and applies it to every
/// operation. Records do not name the curve, so the managers on both ends
/// of a store or transfer must agree on it.
#[derive(Clone, Copy, Debug)]
pub struct KeyManager {
    curve: Curve,
}

impl KeyManager {
    /// Create a manager for the given curve.
    pub fn new(curve: Curve) -> Self {
        KeyManager { curve }
    }

    /// The curve this manager operates on.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Generate a new key pair from the OS random number generator.
    ///
    /// # Returns
    /// A fresh `KeyPair`, or [`IdentityError::Generation`] if the entropy
    /// source fails. Generation is never retried here; that decision
    /// belongs to the caller.
    pub fn generate(&self) -> Result<KeyPair, IdentityError> {
        match self.curve {
            Curve::Secp256k1 => {
                let mut seed = [0u8; 32];
                OsRng
                    .try_fill_bytes(&mut seed)
                    .map_err(|e| IdentityError::Generation(e.to_string()))?;
                let result = SigningKey::from_bytes(&seed.into());
                seed.zeroize();
                // A draw of zero or at/above the group order cannot seed a
                // key (probability ~2^-128). Surfaced, not resampled.
                let signing_key =
                    result.map_err(|e| IdentityError::Generation(e.to_string()))?;
                Ok(KeyPair::from_private(PrivateKey::from_signing_key(
                    signing_key,
                )))
            }
        }
    }

    /// Serialize a key pair's private record: the triple `(x, y, d)`.
    ///
    /// The public coordinates come first, the private scalar last, each as
    /// a minimal unsigned big-endian integer.
    ///
    /// # Arguments
    /// * `pair` - The key pair to serialize.
    ///
    /// # Returns
    /// The encoded record. The [`IdentityError::Encoding`] kind is part of
    /// the contract but cannot occur for keys built by this crate.
    pub fn encode_private(&self, pair: &KeyPair) -> Result<Vec<u8>, IdentityError> {
        match self.curve {
            Curve::Secp256k1 => {
                let (x, y) = pair.public().coordinates();
                let d = pair.private().to_bytes();
                Ok(codec::encode_record(&[&x, &y, codec::min_bytes(&d)]))
            }
        }
    }

    /// Decode a private record back into a key pair.
    ///
    /// The record must hold exactly three integers `(x, y, d)`. The public
    /// point is validated to lie on the curve and the scalar to be in
    /// range, but the pair is assembled exactly as stored: nothing checks
    /// that the point matches `d·G`.
    ///
    /// # Arguments
    /// * `bytes` - An encoded private record.
    ///
    /// # Returns
    /// The reconstructed `KeyPair`, or [`IdentityError::Decoding`] with
    /// the cause of rejection.
    pub fn decode_private(&self, bytes: &[u8]) -> Result<KeyPair, IdentityError> {
        match self.curve {
            Curve::Secp256k1 => {
                let fields = codec::decode_record(bytes, PRIVATE_FIELDS, self.curve.scalar_size())
                    .map_err(|err| {
                        log::debug!("rejected private key record: {}", err);
                        err
                    })?;
                let public = PublicKey::from_coordinates(&fields[0], &fields[1])?;

                let mut scalar = [0u8; 32];
                scalar[32 - fields[2].len()..].copy_from_slice(&fields[2]);
                let private = PrivateKey::from_bytes(&scalar);
                scalar.zeroize();

                Ok(KeyPair::from_parts(public, private?))
            }
        }
    }

    /// Serialize a public key's record: the pair `(x, y)`.
    pub fn encode_public(&self, key: &PublicKey) -> Result<Vec<u8>, IdentityError> {
        match self.curve {
            Curve::Secp256k1 => {
                let (x, y) = key.coordinates();
                Ok(codec::encode_record(&[&x, &y]))
            }
        }
    }

    /// Decode a public record back into a public key.
    ///
    /// The record must hold exactly two integers `(x, y)` naming a point
    /// on the curve.
    pub fn decode_public(&self, bytes: &[u8]) -> Result<PublicKey, IdentityError> {
        match self.curve {
            Curve::Secp256k1 => {
                let fields = codec::decode_record(bytes, PUBLIC_FIELDS, self.curve.scalar_size())
                    .map_err(|err| {
                        log::debug!("rejected public key record: {}", err);
                        err
                    })?;
                Ok(PublicKey::from_coordinates(&fields[0], &fields[1])?)
            }
        }
    }

    /// Whether two key pairs are the same key.
    ///
    /// Defined as byte equality of the canonical private records, not as
    /// field-wise comparison. The record encoding is injective on valid
    /// keys, so this coincides with `(x, y, d)` equality.
    ///
    /// # Returns
    /// `Ok(true)` iff both pairs encode to identical bytes, or
    /// [`IdentityError::Encoding`] if either side fails to encode.
    pub fn keys_equal(&self, a: &KeyPair, b: &KeyPair) -> Result<bool, IdentityError> {
        let a_record = self.encode_private(a)?;
        let b_record = self.encode_private(b)?;
        Ok(a_record == b_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    /// Private record for d = 1: count 3, the generator coordinates, then
    /// the one-byte scalar.
    const D1_PRIVATE_RECORD_HEX: &str = "032079be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f8179820483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b80101";

    /// Public record for the generator point: count 2, two 32-byte fields.
    const D1_PUBLIC_RECORD_HEX: &str = "022079be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f8179820483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn manager() -> KeyManager {
        KeyManager::new(Curve::Secp256k1)
    }

    fn pair_for_scalar(d: u64) -> KeyPair {
        let mut scalar = [0u8; 32];
        scalar[24..].copy_from_slice(&d.to_be_bytes());
        KeyPair::from_private(PrivateKey::from_bytes(&scalar).unwrap())
    }

    #[test]
    fn test_generate_consistent_pair() {
        let pair = manager().generate().unwrap();
        assert_eq!(pair.private().public_key(), *pair.public());
    }

    #[test]
    fn test_generated_pairs_differ() {
        let mgr = manager();
        let a = mgr.generate().unwrap();
        let b = mgr.generate().unwrap();
        assert!(!mgr.keys_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_encode_private_golden() {
        let record = manager().encode_private(&pair_for_scalar(1)).unwrap();
        assert_eq!(hex::encode(record), D1_PRIVATE_RECORD_HEX);
    }

    #[test]
    fn test_encode_public_golden() {
        let pair = pair_for_scalar(1);
        let record = manager().encode_public(pair.public()).unwrap();
        assert_eq!(hex::encode(record), D1_PUBLIC_RECORD_HEX);
    }

    #[test]
    fn test_private_roundtrip() {
        let mgr = manager();
        let pair = mgr.generate().unwrap();

        let record = mgr.encode_private(&pair).unwrap();
        let decoded = mgr.decode_private(&record).unwrap();

        assert!(mgr.keys_equal(&pair, &decoded).unwrap());
        assert_eq!(decoded.private().to_bytes(), pair.private().to_bytes());
        assert_eq!(decoded.public(), pair.public());
    }

    #[test]
    fn test_public_roundtrip() {
        let mgr = manager();
        let pair = mgr.generate().unwrap();

        let record = mgr.encode_public(pair.public()).unwrap();
        let decoded = mgr.decode_public(&record).unwrap();
        assert_eq!(decoded, *pair.public());
    }

    #[test]
    fn test_decode_private_rejects_public_record() {
        let mgr = manager();
        let record = hex::decode(D1_PUBLIC_RECORD_HEX).unwrap();
        assert!(matches!(
            mgr.decode_private(&record),
            Err(IdentityError::Decoding(DecodeError::FieldCount {
                expected: 3,
                got: 2
            }))
        ));
    }

    #[test]
    fn test_decode_public_rejects_private_record() {
        let mgr = manager();
        let record = hex::decode(D1_PRIVATE_RECORD_HEX).unwrap();
        assert!(matches!(
            mgr.decode_public(&record),
            Err(IdentityError::Decoding(DecodeError::FieldCount {
                expected: 2,
                got: 3
            }))
        ));
    }

    #[test]
    fn test_decode_private_rejects_truncated_record() {
        let mgr = manager();
        let record = hex::decode(D1_PRIVATE_RECORD_HEX).unwrap();
        assert!(matches!(
            mgr.decode_private(&record[..record.len() - 1]),
            Err(IdentityError::Decoding(DecodeError::Truncated))
        ));
    }

    #[test]
    fn test_decode_private_rejects_zero_scalar() {
        let mgr = manager();
        // Valid generator coordinates with d = 0 appended.
        let mut record = hex::decode(D1_PUBLIC_RECORD_HEX).unwrap();
        record[0] = 0x03;
        record.extend_from_slice(&[0x01, 0x00]);
        assert!(matches!(
            mgr.decode_private(&record),
            Err(IdentityError::Decoding(DecodeError::ScalarOutOfRange))
        ));
    }

    #[test]
    fn test_decode_public_rejects_off_curve_point() {
        let mgr = manager();
        // (x, y) = (1, 1) is not on secp256k1.
        let record = [0x02, 0x01, 0x01, 0x01, 0x01];
        assert!(matches!(
            mgr.decode_public(&record),
            Err(IdentityError::Decoding(DecodeError::PointNotOnCurve))
        ));
    }

    #[test]
    fn test_decode_public_rejects_garbage() {
        let mgr = manager();
        assert!(mgr.decode_public(&[]).is_err());
        assert!(mgr.decode_public(&[0xff, 0xff]).is_err());
    }

    #[test]
    fn test_keys_equal_same_scalar() {
        let mgr = manager();
        let a = pair_for_scalar(7);
        let b = pair_for_scalar(7);
        assert!(mgr.keys_equal(&a, &b).unwrap());
        assert!(!mgr.keys_equal(&a, &pair_for_scalar(8)).unwrap());
    }

    #[test]
    fn test_minimal_scalar_width_roundtrips() {
        // A short scalar exercises the sub-32-byte field path.
        let mgr = manager();
        let pair = pair_for_scalar(0xabc1_23);

        let record = mgr.encode_private(&pair).unwrap();
        let decoded = mgr.decode_private(&record).unwrap();
        assert!(mgr.keys_equal(&pair, &decoded).unwrap());
    }
}
