//! Checksum-computing byte-stream reader.
//!
//! [`ChecksumReader`] wraps a `std::io::Read` source and hashes every byte
//! the caller pulls through it, passing the bytes on unchanged. Once the
//! caller is done reading, the digest is finalized once and can be fetched
//! as raw bytes or lowercase hex.
//!
//! ```
//! use std::io::Read;
//! use sumstream_core::ChecksumReader;
//!
//! let mut reader = ChecksumReader::sha256(&b"abc"[..]);
//! let mut out = Vec::new();
//! reader.read_to_end(&mut out).unwrap();
//! assert_eq!(
//!     reader.get_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod config;
pub mod logging;

pub mod algorithm;
pub mod backend;
pub mod checksum;
pub mod digest;
pub mod error;
pub mod stream;

pub use algorithm::ChecksumType;
pub use backend::{DigestBackend, Sha256Backend};
pub use digest::Digest;
pub use error::{ChecksumError, Result};
pub use stream::ChecksumReader;
