//! GitMesh SDK - identity key pairs and account addresses.
//!
//! Identities on the GitMesh network are elliptic-curve key pairs. This
//! crate covers their lifecycle:
//! - [`KeyManager`] generates pairs on a configured [`Curve`] and moves them
//!   in and out of a compact record encoding for storage and transport
//! - [`address`] derives the short, checksummed, base58 account address
//!   shown next to commits and used to tag authorship
//!
//! Key material flows one way: a key pair is generated or decoded, its
//! public half feeds address derivation, and external layers store the
//! encoded records opaquely.

pub mod address;
pub mod curve;
pub mod ec;
pub mod manager;

mod codec;
mod error;

pub use curve::Curve;
pub use ec::{KeyPair, PrivateKey, PublicKey};
pub use error::{DecodeError, IdentityError};
pub use manager::KeyManager;
