//! Fatal errors of a verification run.

use crate::manifest::ManifestError;
use std::io;
use std::path::PathBuf;

/// Anything that stops the run. Missing files and digest mismatches are
/// verdicts, not errors.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// A listed file exists but could not be read (permissions, a directory,
    /// or removed between the existence check and the open).
    #[error("manifest line {line}: cannot read {}", path.display())]
    Digest {
        line: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the report failed (e.g. closed stdout).
    #[error("cannot write report")]
    Output(#[source] io::Error),
}
