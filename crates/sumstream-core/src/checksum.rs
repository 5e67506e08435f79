//! Whole-stream and whole-file checksums built on [`ChecksumReader`].
//!
//! Each helper drains its input through a checksum reader in bounded chunks,
//! so memory use does not grow with the input size.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::algorithm::ChecksumType;
use crate::digest::Digest;
use crate::error::ChecksumError;
use crate::stream::ChecksumReader;

pub const DEFAULT_BUF_SIZE: usize = 64 * 1024;

/// Read `reader` to end-of-stream through a checksum reader and return the digest.
///
/// `Interrupted` reads are retried; every other source error is returned as-is.
pub fn checksum_reader<R: Read>(
    reader: R,
    algorithm: ChecksumType,
    buf_size: usize,
) -> io::Result<Digest> {
    let mut hashing = ChecksumReader::new(reader, algorithm);
    let mut buf = vec![0u8; buf_size.max(1)];
    loop {
        match hashing.read(&mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(hashing.finalize().clone())
}

/// Compute the digest of a file.
pub fn checksum_path(path: &Path, algorithm: ChecksumType, buf_size: usize) -> Result<Digest> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let digest = checksum_reader(f, algorithm, buf_size)
        .with_context(|| format!("read {}", path.display()))?;
    tracing::debug!(path = %path.display(), %algorithm, %digest, "computed checksum");
    Ok(digest)
}

/// Check a file against an expected digest.
///
/// Returns the computed digest on success and `ChecksumError::Mismatch`
/// (inside the `anyhow` error) when they differ.
pub fn verify_path(path: &Path, expected: &Digest, buf_size: usize) -> Result<Digest> {
    let actual = checksum_path(path, expected.algorithm(), buf_size)?;
    if &actual != expected {
        tracing::warn!(path = %path.display(), %expected, %actual, "checksum mismatch");
        return Err(ChecksumError::Mismatch {
            expected: expected.to_hex(),
            actual: actual.to_hex(),
        })
        .with_context(|| format!("verify {}", path.display()));
    }
    Ok(actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sha256_hex(path: &Path) -> String {
        checksum_path(path, ChecksumType::Sha256, DEFAULT_BUF_SIZE)
            .unwrap()
            .to_hex()
    }

    #[test]
    fn checksum_path_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let path = f.path();
        let digest = sha256_hex(path);
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn checksum_path_known_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello\n").unwrap();
        f.flush().unwrap();
        let path = f.path();
        let digest = sha256_hex(path);
        assert_eq!(
            digest,
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
    }

    #[test]
    fn checksum_path_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bin");
        let err = checksum_path(&missing, ChecksumType::Sha256, DEFAULT_BUF_SIZE).unwrap_err();
        assert!(format!("{:#}", err).contains("open"));
    }

    #[test]
    fn checksum_reader_ignores_buffer_size() {
        let data: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
        let a = checksum_reader(&data[..], ChecksumType::Sha256, 1).unwrap();
        let b = checksum_reader(&data[..], ChecksumType::Sha256, 0).unwrap();
        let c = checksum_reader(&data[..], ChecksumType::Sha256, DEFAULT_BUF_SIZE).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn verify_path_ok_and_mismatch() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"abc").unwrap();
        f.flush().unwrap();

        let good = Digest::from_hex(
            ChecksumType::Sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        )
        .unwrap();
        let got = verify_path(f.path(), &good, DEFAULT_BUF_SIZE).unwrap();
        assert_eq!(got, good);

        let bad = Digest::from_bytes(ChecksumType::Sha256, vec![0; 32]).unwrap();
        let err = verify_path(f.path(), &bad, DEFAULT_BUF_SIZE).unwrap_err();
        match err.downcast_ref::<ChecksumError>() {
            Some(ChecksumError::Mismatch { expected, actual }) => {
                assert_eq!(expected, &"00".repeat(32));
                assert_eq!(actual, &good.to_hex());
            }
            other => panic!("expected Mismatch, got {:?}", other),
        }
    }
}
