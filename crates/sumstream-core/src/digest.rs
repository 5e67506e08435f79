//! Finalized digest values and their hex form.

use std::fmt;

use crate::algorithm::ChecksumType;
use crate::error::{ChecksumError, Result};

/// A finalized digest: the algorithm that produced it and its raw bytes.
///
/// The byte length always equals `algorithm.output_len()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: ChecksumType,
    bytes: Vec<u8>,
}

impl Digest {
    /// Build from raw bytes, checking the length against the algorithm.
    pub fn from_bytes(algorithm: ChecksumType, bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != algorithm.output_len() {
            return Err(ChecksumError::DigestLength {
                expected: algorithm.output_len(),
                actual: bytes.len(),
            });
        }
        Ok(Self { algorithm, bytes })
    }

    /// Wrap backend output. A backend returning the wrong length is a defect,
    /// not a recoverable error.
    pub(crate) fn from_backend(algorithm: ChecksumType, bytes: Vec<u8>) -> Self {
        assert_eq!(
            bytes.len(),
            algorithm.output_len(),
            "{} backend produced a digest of the wrong length",
            algorithm
        );
        Self { algorithm, bytes }
    }

    /// Parse a hex digest (either case) for the given algorithm.
    pub fn from_hex(algorithm: ChecksumType, s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim())?;
        Self::from_bytes(algorithm, bytes)
    }

    pub fn algorithm(&self) -> ChecksumType {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex, two characters per byte, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
