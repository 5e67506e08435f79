//! Check command: verify a file against an expected digest.

use anyhow::{Context, Result};
use std::path::Path;
use sumstream_core::checksum::verify_path;
use sumstream_core::{ChecksumType, Digest};

/// Verify `path` and print `<path>: OK`; mismatches are returned as errors.
pub fn run_check(
    path: &Path,
    expected: &str,
    algorithm: ChecksumType,
    buf_size: usize,
) -> Result<()> {
    let expected = Digest::from_hex(algorithm, expected)
        .with_context(|| format!("expected {} digest", algorithm))?;
    verify_path(path, &expected, buf_size)?;
    println!("{}: OK", path.display());
    Ok(())
}
