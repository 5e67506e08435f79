//! Supported checksum algorithms.
//!
//! The set is closed: each variant maps to exactly one backend in
//! [`crate::backend`]. Adding an algorithm means adding a variant here and a
//! backend type there; the reader never branches on the algorithm.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChecksumError;

/// Digest algorithm used by a checksum stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumType {
    #[default]
    #[serde(alias = "sha-256", alias = "SHA256", alias = "SHA-256")]
    Sha256,
}

impl ChecksumType {
    /// Length in bytes of the finalized digest.
    pub const fn output_len(self) -> usize {
        match self {
            ChecksumType::Sha256 => 32,
        }
    }

    /// Canonical lowercase name, as written in config files.
    pub const fn name(self) -> &'static str {
        match self {
            ChecksumType::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for ChecksumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChecksumType {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(ChecksumType::Sha256),
            _ => Err(ChecksumError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
