//! Error types for manifest reading and line parsing.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file itself could not be opened.
    #[error("cannot open manifest {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the manifest failed part-way through.
    #[error("cannot read manifest {} after line {line}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A line did not split into exactly path, algorithm and digest.
    #[error("manifest line {line}: expected 3 fields (path, algorithm, digest), found {found}")]
    MalformedLine { line: usize, found: usize },

    /// The algorithm token is not one of md5, sha1, sha256.
    #[error("manifest line {line}: unsupported digest algorithm {token:?}")]
    UnsupportedAlgorithm { line: usize, token: String },
}
