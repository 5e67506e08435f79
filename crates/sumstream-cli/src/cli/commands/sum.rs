//! Sum command: print the digest of each input.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use sumstream_core::checksum::{checksum_path, checksum_reader};
use sumstream_core::{ChecksumType, Digest};

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Digest a single input; `-` reads stdin.
pub fn sum_one(path: &Path, algorithm: ChecksumType, buf_size: usize) -> Result<Digest> {
    if is_stdin(path) {
        let stdin = io::stdin();
        return checksum_reader(stdin.lock(), algorithm, buf_size).context("read stdin");
    }
    checksum_path(path, algorithm, buf_size)
}

/// Print `<hex>  <path>` for each input, in order. No paths means stdin.
pub fn run_sum(paths: &[PathBuf], algorithm: ChecksumType, buf_size: usize) -> Result<()> {
    let stdin_only = [PathBuf::from("-")];
    let paths = if paths.is_empty() { &stdin_only[..] } else { paths };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in paths {
        let digest = sum_one(path, algorithm, buf_size)?;
        writeln!(out, "{}  {}", digest, path.display())?;
    }
    Ok(())
}
