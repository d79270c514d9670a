//! Integration tests: parse local files and in-memory documents.

use sectxt_core::config::{SectxtConfig, ValidationOptions};
use sectxt_core::fields::Disclosure;
use sectxt_core::Error;
use std::io::Write;
use std::path::Path;

fn testdata() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/security.txt"))
}

#[test]
fn parses_full_document_from_file() {
    let sec = sectxt_core::from_file(testdata(), &SectxtConfig::default()).expect("from_file");
    assert_eq!(sec.contact().as_str(), "security@example.com");
    assert_eq!(sec.disclosure(), Disclosure::Full);
    assert_eq!(sec.disclosure().to_string(), "full");
    assert_eq!(sec.encryption().host(), Some("example.com"));
    assert_eq!(sec.encryption().path(), "/security.gpg");
    assert_eq!(
        sec.acknowledgements().as_str(),
        "https://example.com/about/security"
    );
    assert!(sec.origin().is_none());
}

#[test]
fn read_dispatches_plain_paths_to_disk() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"Contact: +1-555-0100\n").unwrap();
    f.flush().unwrap();
    let addr = f.path().to_str().unwrap();
    let sec = sectxt_core::read(addr, &SectxtConfig::default()).expect("read");
    assert_eq!(sec.contact().as_str(), "+1-555-0100");
}

#[test]
fn same_origin_is_skipped_for_local_files() {
    let mut cfg = SectxtConfig::default();
    cfg.validation = ValidationOptions {
        live_validation: false,
        enforce_same_origin: true,
    };
    let sec = sectxt_core::from_file(testdata(), &cfg).expect("from_file");
    assert!(!sec.encryption().is_empty());
    assert!(!sec.acknowledgements().is_empty());
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("security.txt");
    let err = sectxt_core::from_file(&missing, &SectxtConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
}

#[test]
fn parse_str_end_to_end() {
    let doc = "\
Contact: https://example.com/contact
Encryption: https://example.com/security.gpg?x=1#frag
Disclosure: FULL
Hiring: https://example.com/jobs
";
    let sec = sectxt_core::parse_str(doc, &SectxtConfig::default()).expect("parse_str");
    assert_eq!(sec.contact().as_str(), "https://example.com/contact");
    assert!(sec.encryption() == "https://example.com/security.gpg");
    assert_eq!(sec.disclosure(), Disclosure::Full);
    assert!(sec.acknowledgements().is_empty());
}
