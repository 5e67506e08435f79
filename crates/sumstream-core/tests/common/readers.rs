//! Scripted `Read` sources for exercising the checksum reader.

use std::io::{self, Read};

/// Hands out at most `chunk` bytes per call, regardless of buffer size.
pub struct ChunkedReader {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
}

impl ChunkedReader {
    pub fn new(data: Vec<u8>, chunk: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk: chunk.max(1),
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.data[self.pos..];
        let n = remaining.len().min(buf.len()).min(self.chunk);
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// Wraps a reader and fails the read calls listed in `fail_on` (0-based call
/// index) with `kind`, without consuming any data on those calls.
pub struct FailingReader<R> {
    inner: R,
    calls: usize,
    fail_on: Vec<usize>,
    kind: io::ErrorKind,
}

impl<R> FailingReader<R> {
    pub fn new(inner: R, fail_on: Vec<usize>, kind: io::ErrorKind) -> Self {
        Self {
            inner,
            calls: 0,
            fail_on,
            kind,
        }
    }
}

impl<R: Read> Read for FailingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_on.contains(&call) {
            // Scribble into the buffer so a wrapper that hashes on error would diverge.
            for b in buf.iter_mut() {
                *b = 0xee;
            }
            return Err(io::Error::new(self.kind, format!("injected failure on call {}", call)));
        }
        self.inner.read(buf)
    }
}

/// Deterministic pseudo-random test data.
pub fn sample_data(len: usize) -> Vec<u8> {
    let mut x: u32 = 0x1234_5678;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            (x >> 24) as u8
        })
        .collect()
}
