//! Digest backends: the narrow init/update/finalize contract the reader
//! hashes through.

use sha2::{Digest as _, Sha256};

use crate::algorithm::ChecksumType;

/// Running hash state for one algorithm.
///
/// `update` is infallible. A backend that cannot continue must panic rather
/// than return a partial digest.
pub trait DigestBackend: Send {
    /// Feed bytes into the running state.
    fn update(&mut self, data: &[u8]);

    /// Consume the state and produce the final digest.
    fn finalize(self: Box<Self>) -> Vec<u8>;

    /// Length of the value `finalize` returns.
    fn output_len(&self) -> usize;
}

/// SHA-256 via the `sha2` crate.
#[derive(Clone, Default)]
pub struct Sha256Backend(Sha256);

impl Sha256Backend {
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    /// One-shot hash of a complete buffer.
    pub fn digest(data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }
}

impl DigestBackend for Sha256Backend {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_vec()
    }

    fn output_len(&self) -> usize {
        ChecksumType::Sha256.output_len()
    }
}

impl ChecksumType {
    /// Initialize a fresh backend for this algorithm.
    pub fn backend(self) -> Box<dyn DigestBackend> {
        match self {
            ChecksumType::Sha256 => Box::new(Sha256Backend::new()),
        }
    }
}
