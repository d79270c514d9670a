//! Address classification and well-known path rewriting.

use std::path::PathBuf;
use url::Url;

use crate::error::Error;

/// Fixed filename every network lookup is pointed at.
pub const WELL_KNOWN_FILENAME: &str = "security.txt";

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Url(Url),
    Path(PathBuf),
}

impl Target {
    /// Classifies `addr` as a network URL or a local path.
    ///
    /// `http://` and `https://` addresses must parse, otherwise this fails
    /// before any I/O. `file://` URLs become paths. Anything else is taken
    /// as a local path.
    pub fn resolve(addr: &str) -> Result<Self, Error> {
        let lower = addr.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return well_known_url(addr).map(Target::Url);
        }
        if lower.starts_with("file://") {
            let url = parse(addr)?;
            if let Ok(path) = url.to_file_path() {
                return Ok(Target::Path(path));
            }
        }
        Ok(Target::Path(PathBuf::from(addr)))
    }
}

fn parse(addr: &str) -> Result<Url, Error> {
    Url::parse(addr.trim()).map_err(|source| Error::InvalidAddress {
        addr: addr.to_string(),
        source,
    })
}

/// Fails unless `url` is `http` or `https`.
pub fn ensure_http_scheme(url: &Url) -> Result<(), Error> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::UnsupportedScheme {
            url: url.to_string(),
            scheme: other.to_string(),
        }),
    }
}

/// Parses `addr` and points it at `/security.txt` unless its path already
/// ends with the well-known filename. Only `http` and `https` are accepted.
///
/// - `https://example.com/somepath` → `https://example.com/security.txt`
/// - `https://example.com/.well-known/security.txt` is left unchanged
pub fn well_known_url(addr: &str) -> Result<Url, Error> {
    let mut url = parse(addr)?;
    ensure_http_scheme(&url)?;
    if !url.path().ends_with(WELL_KNOWN_FILENAME) {
        url.set_path(WELL_KNOWN_FILENAME);
    }
    Ok(url)
}
