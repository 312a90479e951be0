//! Elliptic-curve key material for GitMesh identities.

pub mod keypair;
pub mod private_key;
pub mod public_key;

pub use keypair::KeyPair;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
