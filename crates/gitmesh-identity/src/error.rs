/// Errors surfaced by key generation, serialization, and lookup.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The secure random source failed while generating a key. Not retried
    /// internally; the caller decides whether to try again.
    #[error("key generation failed: {0}")]
    Generation(String),

    /// An in-memory key could not be serialized. Keys produced by this
    /// crate always encode, so seeing this indicates a broken invariant.
    #[error("key encoding failed: {0}")]
    Encoding(String),

    /// An encoded key record was rejected. Always recoverable: discard the
    /// input and report the cause.
    #[error("key decoding failed: {0}")]
    Decoding(#[from] DecodeError),
}

/// Reasons an encoded key record or key string is rejected.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("record is truncated")]
    Truncated,

    #[error("wrong field count: expected {expected}, got {got}")]
    FieldCount { expected: u64, got: u64 },

    #[error("empty integer field")]
    EmptyField,

    #[error("integer field has a leading zero byte")]
    NonMinimal,

    #[error("integer field is {got} bytes, curve limit is {max}")]
    FieldTooWide { max: usize, got: usize },

    #[error("{0} trailing bytes after record")]
    TrailingBytes(usize),

    #[error("public point is not on the curve")]
    PointNotOnCurve,

    #[error("private scalar is out of range")]
    ScalarOutOfRange,

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}
