//! Error types for splat decoding.

use thiserror::Error;

/// Errors that can occur while decoding splat records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer length is not a whole number of 32-byte records.
    #[error("malformed splat data: {len} bytes leaves a trailing fragment of {remainder} bytes")]
    MalformedLength { len: usize, remainder: usize },

    /// A single record was shorter than the record stride.
    #[error("truncated splat record: got {len} of 32 bytes")]
    TruncatedRecord { len: usize },

    /// A single record was longer than the record stride.
    #[error("splat record too long: got {len} bytes, expected 32")]
    RecordLength { len: usize },
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
