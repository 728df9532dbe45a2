//! Verification loop: check every manifest entry against the checking
//! directory and print one `<path> <VERDICT>` line per entry.
//!
//! The path is written and flushed before hashing starts, so slow files show
//! progress. Processing is strictly sequential and stops at the first fatal
//! error; lines already reported stay on the output.

mod error;

pub use error::VerifyError;

use crate::checksum;
use crate::config::{DigestCase, HashMode, SumcheckConfig};
use crate::manifest::{Manifest, ManifestEntry};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Outcome for a single manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Fail,
    NotFound,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Ok => "OK",
            Verdict::Fail => "FAIL",
            Verdict::NotFound => "NOT FOUND",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs of a verification run.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub manifest: PathBuf,
    pub checking_dir: PathBuf,
    pub hash_mode: HashMode,
    pub digest_case: DigestCase,
}

impl VerifyOptions {
    /// Options with default hashing and comparison behavior.
    pub fn new(manifest: impl Into<PathBuf>, checking_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            checking_dir: checking_dir.into(),
            hash_mode: HashMode::default(),
            digest_case: DigestCase::default(),
        }
    }

    /// Take hashing and comparison behavior from the loaded config.
    pub fn with_config(mut self, cfg: &SumcheckConfig) -> Self {
        self.hash_mode = cfg.hash_mode;
        self.digest_case = cfg.digest_case;
        self
    }
}

/// Verdict counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifySummary {
    pub ok: usize,
    pub failed: usize,
    pub not_found: usize,
}

impl VerifySummary {
    pub fn total(&self) -> usize {
        self.ok + self.failed + self.not_found
    }

    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Ok => self.ok += 1,
            Verdict::Fail => self.failed += 1,
            Verdict::NotFound => self.not_found += 1,
        }
    }
}

/// Verify the manifest and report to stdout.
pub fn verify(opts: &VerifyOptions) -> Result<VerifySummary, VerifyError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    verify_to(opts, &mut out)
}

/// Verify the manifest and report to `out`.
pub fn verify_to<W: Write>(opts: &VerifyOptions, out: &mut W) -> Result<VerifySummary, VerifyError> {
    let manifest = Manifest::open(&opts.manifest)?;
    tracing::info!(
        "verifying {} against {}",
        opts.manifest.display(),
        opts.checking_dir.display()
    );
    let summary = run_manifest(manifest, opts, out)?;
    tracing::info!(
        "verified {} entries: {} ok, {} failed, {} not found",
        summary.total(),
        summary.ok,
        summary.failed,
        summary.not_found
    );
    Ok(summary)
}

/// Drive the per-entry loop over an already opened manifest.
pub fn run_manifest<R: BufRead, W: Write>(
    manifest: Manifest<R>,
    opts: &VerifyOptions,
    out: &mut W,
) -> Result<VerifySummary, VerifyError> {
    let mut summary = VerifySummary::default();
    for entry in manifest {
        let entry = entry?;
        write!(out, "{} ", entry.relative_path).map_err(VerifyError::Output)?;
        out.flush().map_err(VerifyError::Output)?;

        let verdict = check_entry(&entry, opts)?;
        writeln!(out, "{}", verdict).map_err(VerifyError::Output)?;
        summary.record(verdict);
    }
    out.flush().map_err(VerifyError::Output)?;
    Ok(summary)
}

/// Resolve one entry under the checking directory and compare digests.
pub fn check_entry(entry: &ManifestEntry, opts: &VerifyOptions) -> Result<Verdict, VerifyError> {
    let path = opts.checking_dir.join(&entry.relative_path);
    if !path.exists() {
        tracing::debug!(line = entry.line, path = %path.display(), "not found");
        return Ok(Verdict::NotFound);
    }

    warn_on_digest_length(entry);
    let actual = digest_for(entry, &path, opts.hash_mode)?;
    let verdict = if digests_match(&actual, &entry.expected_digest, opts.digest_case) {
        Verdict::Ok
    } else {
        Verdict::Fail
    };
    tracing::debug!(
        line = entry.line,
        path = %path.display(),
        algorithm = %entry.algorithm,
        %verdict,
        "checked"
    );
    Ok(verdict)
}

fn digest_for(entry: &ManifestEntry, path: &Path, mode: HashMode) -> Result<String, VerifyError> {
    checksum::compute_digest(path, entry.algorithm, mode).map_err(|source| VerifyError::Digest {
        line: entry.line,
        path: path.to_path_buf(),
        source,
    })
}

/// Compare a computed (lowercase) digest with the manifest's expected one.
pub fn digests_match(actual: &str, expected: &str, case: DigestCase) -> bool {
    match case {
        DigestCase::Exact => actual == expected,
        DigestCase::Insensitive => actual.eq_ignore_ascii_case(expected),
    }
}

fn warn_on_digest_length(entry: &ManifestEntry) {
    let expected_len = entry.algorithm.hex_len();
    if entry.expected_digest.len() != expected_len {
        tracing::warn!(
            "manifest line {}: {} digest for {} has {} characters, expected {}",
            entry.line,
            entry.algorithm,
            entry.relative_path,
            entry.expected_digest.len(),
            expected_len
        );
    }
}
