//! CLI for the sumcheck manifest verifier.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use sumcheck_core::config;
use sumcheck_core::verify::{self, VerifyOptions};

/// Check files against a manifest of expected digests.
#[derive(Debug, Parser)]
#[command(name = "sumcheck")]
#[command(
    about = "Verify files against a manifest of md5/sha1/sha256 digests",
    long_about = None
)]
pub struct Cli {
    /// Manifest file: one `<relative path> <md5|sha1|sha256> <hex digest>` per line.
    #[arg(long = "file", value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Directory the manifest paths are relative to.
    #[arg(long = "dir", value_name = "CHECKING_DIR")]
    pub dir: PathBuf,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    /// Load config (defaults if it cannot be read), then verify. Verdicts
    /// never affect the exit status; only fatal errors are returned.
    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_default();
        tracing::debug!("loaded config: {:?}", cfg);

        let opts = self.options(&cfg);
        verify::verify(&opts)?;
        Ok(())
    }

    pub fn options(&self, cfg: &config::SumcheckConfig) -> VerifyOptions {
        VerifyOptions::new(&self.manifest, &self.dir).with_config(cfg)
    }
}

#[cfg(test)]
mod tests;
