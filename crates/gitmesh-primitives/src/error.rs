/// Unified error type for primitives operations.
///
/// Covers errors from base58 decoding and wire-format reading.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("unexpected end of data")]
    UnexpectedEof,
}
