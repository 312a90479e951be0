#![deny(missing_docs)]

//! GitMesh SDK - complete SDK.
//!
//! Re-exports all GitMesh components for convenient single-crate usage.

pub use gitmesh_identity as identity;
pub use gitmesh_primitives as primitives;
