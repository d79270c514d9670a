//! Resolves an address or local path into a line source.
//!
//! Network targets are rewritten to the well-known filename and fetched
//! with one non-redirecting GET via the curl crate. Local paths are made
//! absolute and opened for reading.

mod address;
mod http;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use url::Url;

use crate::config::FetchConfig;
use crate::error::Error;

pub use address::{ensure_http_scheme, well_known_url, Target, WELL_KNOWN_FILENAME};
pub use http::{get, status_of, Response};

/// Fetches the document at `url`.
///
/// Non-200 responses (including redirects) are logged and their body is
/// still returned for parsing.
pub fn fetch_url(url: &Url, cfg: &FetchConfig) -> Result<Response, Error> {
    tracing::info!(url = %url, "fetching security.txt");
    let resp = get(url, cfg)?;
    if !resp.is_ok() {
        tracing::warn!(url = %url, status = resp.status, "security.txt fetch returned non-200");
    }
    Ok(resp)
}

/// Opens a local file after resolving it to an absolute path.
pub fn open_file(path: &Path) -> Result<BufReader<File>, Error> {
    let abs = std::path::absolute(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %abs.display(), "opening local security.txt");
    let f = File::open(&abs).map_err(|source| Error::Open { path: abs, source })?;
    Ok(BufReader::new(f))
}
