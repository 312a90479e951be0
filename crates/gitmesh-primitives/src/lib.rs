//! GitMesh SDK - hashing, encoding, and wire-format primitives.
//!
//! This crate provides the building blocks shared across the GitMesh SDK:
//! - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
//! - Base58 encoding/decoding with the Bitcoin alphabet
//! - Cursor-based wire reading/writing with variable-length integers

pub mod base58;
pub mod hash;
pub mod wire;

mod error;
pub use error::PrimitivesError;
