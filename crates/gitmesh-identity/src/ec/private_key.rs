//! secp256k1 private keys.

use k256::ecdsa::SigningKey;
use zeroize::Zeroize;

use crate::ec::public_key::PublicKey;
use crate::error::DecodeError;

/// Length of a serialized private scalar in bytes.
const SCALAR_BYTES_LEN: usize = 32;

/// A secp256k1 private key.
///
/// Wraps a k256 `SigningKey`. The scalar is the secret half of an
/// identity; it leaves this type only through [`to_bytes`](Self::to_bytes)
/// and the record encoding.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Create a private key from a raw 32-byte big-endian scalar.
    ///
    /// # Arguments
    /// * `bytes` - The 32-byte scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the scalar is nonzero and below the curve
    /// order, `ScalarOutOfRange` otherwise.
    pub fn from_bytes(bytes: &[u8; SCALAR_BYTES_LEN]) -> Result<Self, DecodeError> {
        let inner =
            SigningKey::from_bytes(&(*bytes).into()).map_err(|_| DecodeError::ScalarOutOfRange)?;
        Ok(PrivateKey { inner })
    }

    /// Create a private key from a 64-character hex string.
    ///
    /// # Arguments
    /// * `hex_str` - Hex encoding of the 32-byte scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the hex or the scalar
    /// is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, DecodeError> {
        let bytes = hex::decode(hex_str).map_err(|e| DecodeError::InvalidHex(e.to_string()))?;
        if bytes.len() != SCALAR_BYTES_LEN {
            return Err(DecodeError::InvalidHex(format!(
                "expected {} bytes, got {}",
                SCALAR_BYTES_LEN,
                bytes.len()
            )));
        }
        let mut scalar = [0u8; SCALAR_BYTES_LEN];
        scalar.copy_from_slice(&bytes);
        let key = Self::from_bytes(&scalar);
        scalar.zeroize();
        key
    }

    /// Serialize the private scalar as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; SCALAR_BYTES_LEN] {
        let mut out = [0u8; SCALAR_BYTES_LEN];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private scalar as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the public key for this private key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.inner.verifying_key())
    }

    /// Wrap an already-validated k256 signing key.
    pub(crate) fn from_signing_key(inner: SigningKey) -> Self {
        PrivateKey { inner }
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        // Scrub the scratch copy of the scalar; the inner key zeroizes its
        // own storage.
        let mut bytes = self.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
