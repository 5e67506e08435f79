//! Checksum-computing reader.
//!
//! [`ChecksumReader`] wraps any `Read` source and feeds every byte it hands
//! back to the caller into a digest backend, in order, exactly once. The
//! source is not closed or consumed by the wrapper; pass `&mut source` to
//! keep ownership, or use [`ChecksumReader::into_inner`] to get it back.
//!
//! Finalization happens once, explicitly via [`ChecksumReader::finalize`] or
//! implicitly on the first digest accessor. Afterwards the digest is cached
//! and further reads fail with [`ChecksumError::ReadAfterFinalize`] without
//! touching the source.

use std::fmt;
use std::io::{self, Read};

use crate::algorithm::ChecksumType;
use crate::backend::DigestBackend;
use crate::digest::Digest;
use crate::error::{ChecksumError, Result};

/// Reader that hashes data as it passes through.
pub struct ChecksumReader<R> {
    source: R,
    algorithm: ChecksumType,
    /// Live hash state; `None` once finalized.
    backend: Option<Box<dyn DigestBackend>>,
    /// Cached result; `Some` exactly when `backend` is `None`.
    digest: Option<Digest>,
    bytes_hashed: u64,
}

impl<R> ChecksumReader<R> {
    /// Wrap `source`, hashing with `algorithm`.
    pub fn new(source: R, algorithm: ChecksumType) -> Self {
        Self {
            source,
            algorithm,
            backend: Some(algorithm.backend()),
            digest: None,
            bytes_hashed: 0,
        }
    }

    /// Wrap `source` with SHA-256.
    pub fn sha256(source: R) -> Self {
        Self::new(source, ChecksumType::Sha256)
    }

    pub fn checksum_type(&self) -> ChecksumType {
        self.algorithm
    }

    /// Total bytes fed to the digest so far.
    pub fn bytes_hashed(&self) -> u64 {
        self.bytes_hashed
    }

    pub fn is_finalized(&self) -> bool {
        self.digest.is_some()
    }

    /// Shared access to the wrapped source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Unwrap, returning the source. Any unfinalized hash state is dropped.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Finalize the digest on first call; return the cached digest afterwards.
    pub fn finalize(&mut self) -> &Digest {
        let algorithm = self.algorithm;
        let bytes_hashed = self.bytes_hashed;
        let backend = &mut self.backend;
        self.digest.get_or_insert_with(|| {
            let Some(backend) = backend.take() else {
                unreachable!("checksum reader has neither hash state nor digest");
            };
            let declared = backend.output_len();
            let bytes = backend.finalize();
            assert_eq!(
                bytes.len(),
                declared,
                "{} backend returned {} bytes but declares {}",
                algorithm,
                bytes.len(),
                declared
            );
            let digest = Digest::from_backend(algorithm, bytes);
            tracing::debug!(%algorithm, bytes_hashed, digest = %digest, "checksum finalized");
            digest
        })
    }

    /// Finalize and copy the digest into `out`, which must be exactly
    /// `output_len` bytes. Returns the number of bytes written.
    ///
    /// A wrongly sized buffer is rejected before finalization.
    pub fn get_digest(&mut self, out: &mut [u8]) -> Result<usize> {
        let expected = self.algorithm.output_len();
        if out.len() != expected {
            return Err(ChecksumError::DigestBufferSize {
                expected,
                actual: out.len(),
            });
        }
        out.copy_from_slice(self.finalize().as_bytes());
        Ok(expected)
    }

    /// Finalize and return a freshly allocated copy of the digest bytes.
    pub fn dup_digest(&mut self) -> Vec<u8> {
        self.finalize().as_bytes().to_vec()
    }

    /// Finalize and return the lowercase hex digest.
    pub fn get_string(&mut self) -> String {
        self.finalize().to_hex()
    }
}

impl<R: Read> Read for ChecksumReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(backend) = self.backend.as_mut() else {
            tracing::warn!(
                algorithm = %self.algorithm,
                "read attempted after checksum finalization"
            );
            return Err(ChecksumError::ReadAfterFinalize.into_io());
        };
        let n = self.source.read(buf)?;
        if n > 0 {
            backend.update(&buf[..n]);
            self.bytes_hashed += n as u64;
        }
        Ok(n)
    }
}

impl<R> fmt::Debug for ChecksumReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChecksumReader")
            .field("algorithm", &self.algorithm)
            .field("bytes_hashed", &self.bytes_hashed)
            .field("finalized", &self.is_finalized())
            .finish_non_exhaustive()
    }
}
