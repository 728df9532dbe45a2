//! Digest engine: stream a file into one of the supported hashers.
//!
//! In [`HashMode::Text`] the bytes go through the lossy UTF-8 decoder first,
//! so the digest covers the decoded-then-re-encoded text rather than the raw
//! file. Manifests written by tools that hash files read as UTF-8 text with
//! decode errors ignored only verify this way. Use [`HashMode::Raw`] for
//! byte-exact digests.

mod algorithm;
pub mod text;

pub use algorithm::{Algorithm, UnknownAlgorithm};

use crate::config::HashMode;
use sha2::digest::DynDigest;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use text::LossyUtf8;

/// Read chunk size.
pub const CHUNK_SIZE: usize = 16 * 1024;

/// Compute the digest of a file and return it as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large files.
pub fn compute_digest(path: &Path, algorithm: Algorithm, mode: HashMode) -> io::Result<String> {
    let file = File::open(path)?;
    digest_reader(file, algorithm, mode)
}

/// Digest everything `reader` yields.
pub fn digest_reader<R: Read>(
    mut reader: R,
    algorithm: Algorithm,
    mode: HashMode,
) -> io::Result<String> {
    let mut hasher = algorithm.hasher();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut decoded = Vec::with_capacity(CHUNK_SIZE);
    let mut decoder = LossyUtf8::new();
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        match mode {
            HashMode::Raw => hasher.update(&buf[..n]),
            HashMode::Text => {
                decoded.clear();
                decoder.feed(&buf[..n], &mut decoded);
                hasher.update(&decoded);
            }
        }
    }
    if mode == HashMode::Text {
        decoded.clear();
        decoder.finish(&mut decoded);
        hasher.update(&decoded);
    }
    Ok(hex::encode(hasher.finalize()))
}
