use super::*;
use clap::error::ErrorKind;
use sumcheck_core::config::{DigestCase, HashMode, SumcheckConfig};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_file_and_dir() {
    let cli = parse(&["sumcheck", "--file", "check.sum", "--dir", "test"]);
    assert_eq!(cli.manifest, PathBuf::from("check.sum"));
    assert_eq!(cli.dir, PathBuf::from("test"));
}

#[test]
fn cli_parse_any_order() {
    let cli = parse(&["sumcheck", "--dir", "/srv/data", "--file=/tmp/m.sum"]);
    assert_eq!(cli.manifest, PathBuf::from("/tmp/m.sum"));
    assert_eq!(cli.dir, PathBuf::from("/srv/data"));
}

#[test]
fn cli_requires_file() {
    let err = Cli::try_parse_from(["sumcheck", "--dir", "test"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_requires_dir() {
    let err = Cli::try_parse_from(["sumcheck", "--file", "check.sum"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_rejects_positional_args() {
    assert!(Cli::try_parse_from(["sumcheck", "check.sum", "test"]).is_err());
}

#[test]
fn cli_options_use_config() {
    let cli = parse(&["sumcheck", "--file", "check.sum", "--dir", "test"]);
    let cfg = SumcheckConfig {
        hash_mode: HashMode::Raw,
        digest_case: DigestCase::Insensitive,
    };
    let opts = cli.options(&cfg);
    assert_eq!(opts.manifest, PathBuf::from("check.sum"));
    assert_eq!(opts.checking_dir, PathBuf::from("test"));
    assert_eq!(opts.hash_mode, HashMode::Raw);
    assert_eq!(opts.digest_case, DigestCase::Insensitive);
}

#[test]
fn cli_options_default_config() {
    let cli = parse(&["sumcheck", "--file", "m", "--dir", "d"]);
    let opts = cli.options(&SumcheckConfig::default());
    assert_eq!(opts.hash_mode, HashMode::Text);
    assert_eq!(opts.digest_case, DigestCase::Exact);
}
