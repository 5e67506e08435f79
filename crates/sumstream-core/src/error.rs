//! Error type for checksum streams and digest handling.

use std::io;

/// Failures reported by the checksum reader and digest helpers.
///
/// I/O errors never pass through this type: `Read::read` returns source
/// errors untouched and the file helpers report them through `anyhow`.
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    /// Algorithm name not in the closed set of supported digests.
    #[error("unsupported checksum algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// `read` was called after the digest was finalized.
    #[error("read after checksum finalization")]
    ReadAfterFinalize,

    /// Caller-supplied output buffer does not match the digest length.
    #[error("digest buffer must be {expected} bytes, got {actual}")]
    DigestBufferSize { expected: usize, actual: usize },

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Decoded digest has the wrong length for its algorithm.
    #[error("digest must be {expected} bytes, got {actual}")]
    DigestLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

impl ChecksumError {
    /// Wrap as an `io::Error` so it can be returned from `Read::read`.
    pub(crate) fn into_io(self) -> io::Error {
        io::Error::new(io::ErrorKind::Other, self)
    }
}

pub type Result<T> = std::result::Result<T, ChecksumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_io_wraps_misuse_as_other() {
        let io_err = ChecksumError::ReadAfterFinalize.into_io();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
        let inner = io_err
            .get_ref()
            .and_then(|e| e.downcast_ref::<ChecksumError>())
            .expect("inner ChecksumError");
        assert!(matches!(inner, ChecksumError::ReadAfterFinalize));
    }

    #[test]
    fn display_buffer_size() {
        let err = ChecksumError::DigestBufferSize {
            expected: 32,
            actual: 16,
        };
        assert_eq!(err.to_string(), "digest buffer must be 32 bytes, got 16");
    }
}
