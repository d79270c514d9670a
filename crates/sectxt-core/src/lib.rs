//! Fetch and parse `security.txt` files.
//!
//! [`read`] accepts either an `http(s)://` address or a local path. Network
//! addresses are pointed at `/security.txt` and fetched with a single
//! non-redirecting GET. The document is then parsed line by line into a
//! [`SecurityTxt`].

pub mod config;
pub mod error;
pub mod fetch;
pub mod fields;
pub mod logging;
pub mod parse;
pub mod record;

use std::path::Path;
use url::Url;

use config::SectxtConfig;
use fetch::Target;
use fields::Validator;

pub use error::{Error, FieldError};
pub use record::SecurityTxt;

/// Reads a security.txt from a URL or a local path.
pub fn read(addr: &str, cfg: &SectxtConfig) -> Result<SecurityTxt, Error> {
    match Target::resolve(addr)? {
        Target::Url(url) => fetch_and_parse(url, cfg),
        Target::Path(path) => from_file(&path, cfg),
    }
}

/// Fetches `addr` (rewritten to the well-known filename) and parses it.
/// Same-origin checks compare links against the fetched URL's host.
pub fn from_url(addr: &str, cfg: &SectxtConfig) -> Result<SecurityTxt, Error> {
    let url = fetch::well_known_url(addr)?;
    fetch_and_parse(url, cfg)
}

fn fetch_and_parse(url: Url, cfg: &SectxtConfig) -> Result<SecurityTxt, Error> {
    let resp = fetch::fetch_url(&url, &cfg.fetch)?;
    let validator = Validator::new(cfg.validation, cfg.fetch.clone()).with_origin(url);
    parse::parse(resp.into_reader(), &validator)
}

/// Parses a local file. There is no origin, so same-origin checks are skipped.
pub fn from_file(path: &Path, cfg: &SectxtConfig) -> Result<SecurityTxt, Error> {
    let reader = fetch::open_file(path)?;
    let validator = Validator::new(cfg.validation, cfg.fetch.clone());
    parse::parse(reader, &validator)
}

/// Parses an in-memory document with no origin.
pub fn parse_str(doc: &str, cfg: &SectxtConfig) -> Result<SecurityTxt, Error> {
    let validator = Validator::new(cfg.validation, cfg.fetch.clone());
    parse::parse(doc.as_bytes(), &validator)
}
