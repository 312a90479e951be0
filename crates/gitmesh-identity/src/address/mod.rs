//! Account address derivation.
//!
//! An account address is the short base58 token shown for an identity. It
//! is derived one-way from the public point and always recomputed, never
//! stored: serialize the point uncompressed, fold it to 20 bytes with
//! Hash160, append a 3-byte SHA-256d checksum, base58 the 23-byte payload.
//! Corruption of a copied address is detectable (not correctable) through
//! the embedded checksum.

use gitmesh_primitives::base58;
use gitmesh_primitives::hash::{hash160, sha256d};

use crate::ec::public_key::{PublicKey, UNCOMPRESSED_TAG};

/// Length of the address digest in bytes.
const DIGEST_LEN: usize = 20;

/// Length of the embedded checksum in bytes.
const CHECKSUM_LEN: usize = 3;

/// Derive the account address for a public key.
///
/// The pipeline is fixed: `0x04 ‖ X ‖ Y` with minimal big-endian
/// coordinates, SHA-256, RIPEMD-160, then a checksum of the first three
/// bytes of the double SHA-256 of that digest. The 23-byte result is
/// base58-encoded with leading zero bytes kept as `1` characters.
///
/// Derivation is a pure function of the key: it cannot fail, and equal
/// keys always produce equal addresses.
///
/// # Arguments
/// * `public_key` - The public half of an identity.
///
/// # Returns
/// The base58 address string.
pub fn derive_address(public_key: &PublicKey) -> String {
    let (x, y) = public_key.coordinates();
    let mut point = Vec::with_capacity(1 + x.len() + y.len());
    point.push(UNCOMPRESSED_TAG);
    point.extend_from_slice(&x);
    point.extend_from_slice(&y);

    let digest = hash160(&point);
    let checksum = sha256d(&digest);

    let mut payload = Vec::with_capacity(DIGEST_LEN + CHECKSUM_LEN);
    payload.extend_from_slice(&digest);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    base58::encode(&payload)
}

/// Check an address string's embedded checksum.
///
/// Recomputes the 3-byte checksum over the 20-byte digest and compares.
/// Anything that is not base58, not 23 bytes once decoded, or checksummed
/// differently is rejected.
///
/// # Arguments
/// * `address` - The address string to check.
///
/// # Returns
/// `true` iff the address is self-consistent.
pub fn verify_address(address: &str) -> bool {
    let decoded = match base58::decode(address) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    if decoded.len() != DIGEST_LEN + CHECKSUM_LEN {
        log::debug!(
            "address payload is {} bytes, expected {}",
            decoded.len(),
            DIGEST_LEN + CHECKSUM_LEN
        );
        return false;
    }
    let (digest, checksum) = decoded.split_at(DIGEST_LEN);
    let expected = sha256d(digest);
    checksum == &expected[..CHECKSUM_LEN]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::{KeyPair, PrivateKey};

    /// Golden vectors for the address pipeline. The set covers a
    /// y-coordinate with a leading zero byte (pinning minimal point
    /// serialization) and a digest with a leading zero byte (pinning
    /// base58 zero preservation).
    fn vectors() -> Vec<serde_json::Value> {
        serde_json::from_str(include_str!("testdata/address.vectors.json")).unwrap()
    }

    #[test]
    fn test_golden_vectors_from_public_key() {
        for (i, v) in vectors().iter().enumerate() {
            let public = PublicKey::from_hex(v["publicKey"].as_str().unwrap())
                .unwrap_or_else(|e| panic!("vector #{}: parse pub key: {}", i + 1, e));
            let expected = v["address"].as_str().unwrap();
            assert_eq!(
                derive_address(&public),
                expected,
                "vector #{} ({})",
                i + 1,
                v["name"].as_str().unwrap()
            );
        }
    }

    #[test]
    fn test_golden_vectors_from_private_key() {
        for (i, v) in vectors().iter().enumerate() {
            let private = PrivateKey::from_hex(v["privateKey"].as_str().unwrap())
                .unwrap_or_else(|e| panic!("vector #{}: parse priv key: {}", i + 1, e));
            let pair = KeyPair::from_private(private);
            assert_eq!(
                derive_address(pair.public()),
                v["address"].as_str().unwrap(),
                "vector #{}",
                i + 1
            );
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let pair = KeyPair::from_private(
            PrivateKey::from_hex(
                "eaf02ca348c524e6392655ba4d29603cd1a7347d9d65cfe93ce1ebffdca22694",
            )
            .unwrap(),
        );
        assert_eq!(derive_address(pair.public()), derive_address(pair.public()));
    }

    #[test]
    fn test_payload_is_always_23_bytes() {
        for v in vectors() {
            let decoded =
                gitmesh_primitives::base58::decode(v["address"].as_str().unwrap()).unwrap();
            assert_eq!(decoded.len(), DIGEST_LEN + CHECKSUM_LEN);
        }
    }

    #[test]
    fn test_derived_addresses_verify() {
        for v in vectors() {
            assert!(verify_address(v["address"].as_str().unwrap()));
        }
    }

    #[test]
    fn test_tampered_address_fails_verification() {
        for v in vectors() {
            let address = v["address"].as_str().unwrap();
            let mut tampered: Vec<char> = address.chars().collect();
            // Swap the middle character for a different alphabet member.
            let mid = tampered.len() / 2;
            tampered[mid] = if tampered[mid] == '2' { '3' } else { '2' };
            let tampered: String = tampered.into_iter().collect();
            assert!(
                !verify_address(&tampered),
                "tampered form of {} verified",
                address
            );
        }
    }

    #[test]
    fn test_verify_rejects_non_base58() {
        assert!(!verify_address(""));
        assert!(!verify_address("not an address"));
        assert!(!verify_address("0OIl"));
    }

    #[test]
    fn test_verify_rejects_wrong_payload_length() {
        // Valid base58, wrong decoded width.
        assert!(!verify_address("1"));
        assert!(!verify_address("C3CPq7c8PY"));
    }
}
