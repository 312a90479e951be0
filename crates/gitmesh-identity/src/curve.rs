//! Named-curve configuration.

use std::fmt;

/// The elliptic curve a [`KeyManager`](crate::KeyManager) operates on.
///
/// The curve is configuration, not data: encoded key records never carry
/// it, so every manager that touches a given store or wire must be
/// constructed with the same choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// secp256k1, the curve used by Bitcoin.
    Secp256k1,
}

impl Curve {
    /// Width in bytes of a field coordinate or private scalar on this curve.
    ///
    /// Bounds the integer fields a decoder will accept.
    pub fn scalar_size(&self) -> usize {
        match self {
            Curve::Secp256k1 => 32,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_size() {
        assert_eq!(Curve::Secp256k1.scalar_size(), 32);
    }

    #[test]
    fn test_display() {
        assert_eq!(Curve::Secp256k1.to_string(), "secp256k1");
    }
}
