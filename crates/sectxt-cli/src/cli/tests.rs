//! CLI parse and rendering tests.

use super::output::render_text;
use super::Cli;
use clap::Parser;
use sectxt_core::config::SectxtConfig;
use std::path::Path;
use std::process::ExitCode;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_address() {
    let cli = parse(&["sectxt", "--address", "https://example.com/"]);
    assert_eq!(cli.address.as_deref(), Some("https://example.com/"));
    assert!(!cli.live);
    assert!(!cli.same_origin);
    assert!(!cli.force_tls);
    assert!(!cli.json);
    assert!(cli.timeout.is_none());
    assert!(cli.config.is_none());

    let cli = parse(&["sectxt", "-a", "./security.txt"]);
    assert_eq!(cli.address.as_deref(), Some("./security.txt"));
}

#[test]
fn cli_parse_flags() {
    let cli = parse(&[
        "sectxt",
        "-a",
        "example.txt",
        "--live",
        "--same-origin",
        "--force-tls",
        "--timeout",
        "5",
        "--config",
        "/tmp/sectxt.toml",
        "--json",
    ]);
    assert!(cli.live && cli.same_origin && cli.force_tls && cli.json);
    assert_eq!(cli.timeout, Some(5));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/sectxt.toml")));
}

#[test]
fn cli_version_flag_is_handled_by_clap() {
    let err = Cli::try_parse_from(["sectxt", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn cli_without_address_fails() {
    let code = parse(&["sectxt"]).run().unwrap();
    assert_eq!(code, ExitCode::FAILURE);
}

#[test]
fn overrides_apply_on_top_of_config() {
    let cli = parse(&["sectxt", "-a", "x", "--live", "--timeout", "3"]);
    let cfg = cli.resolve_config(SectxtConfig::default());
    assert!(cfg.validation.live_validation);
    assert!(!cfg.validation.enforce_same_origin);
    assert_eq!(cfg.fetch.timeout_secs, 3);

    let cli = parse(&["sectxt", "-a", "x"]);
    assert_eq!(
        cli.resolve_config(SectxtConfig::default()),
        SectxtConfig::default()
    );
}

#[test]
fn render_text_layout() {
    let doc = "\
Contact: security@example.com
Encryption: https://example.com/security.gpg
Acknowledgements: https://example.com/thanks
";
    let sec = sectxt_core::parse_str(doc, &SectxtConfig::default()).unwrap();
    assert_eq!(
        render_text("https://example.com", &sec),
        "security.txt for https://example.com\n  \
         Contact: security@example.com\n  \
         Acknowledgements: https://example.com/thanks\n  \
         Encryption: https://example.com/security.gpg\n"
    );
}
