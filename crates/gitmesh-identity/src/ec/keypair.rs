//! Key pairs.

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;

/// A private scalar together with a public point.
///
/// The two halves are stored independently: a pair decoded from a record
/// keeps whatever public point the record carried, and nothing checks that
/// the point equals `d·G` for the stored scalar. Callers that need key
/// equality compare canonical encodings via
/// [`KeyManager::keys_equal`](crate::KeyManager::keys_equal); this type
/// deliberately has no `PartialEq` of its own.
#[derive(Clone, Debug)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl KeyPair {
    /// Build a pair from a private key, deriving the matching public key.
    pub fn from_private(private: PrivateKey) -> Self {
        KeyPair {
            public: private.public_key(),
            private,
        }
    }

    /// Assemble a pair from independently obtained halves.
    pub(crate) fn from_parts(public: PublicKey, private: PrivateKey) -> Self {
        KeyPair { public, private }
    }

    /// The public half.
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// The private half.
    pub fn private(&self) -> &PrivateKey {
        &self.private
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_private_derives_public() {
        // d = 1 pairs with the generator point.
        let mut scalar = [0u8; 32];
        scalar[31] = 1;
        let private = PrivateKey::from_bytes(&scalar).unwrap();
        let pair = KeyPair::from_private(private);

        assert_eq!(
            hex::encode(pair.public().to_uncompressed()),
            "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
        assert_eq!(pair.private().to_bytes(), scalar);
    }
}
