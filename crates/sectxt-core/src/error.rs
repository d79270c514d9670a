//! Error types for fetching and parsing.
//!
//! [`Error`] aborts the whole operation. [`FieldError`] only ever rejects a
//! single field value; the parser logs it and moves on to the next line.

use std::io;
use std::path::PathBuf;

/// Fatal error: no record is produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The address looked like a URL but could not be parsed. Raised before any I/O.
    #[error("invalid address {addr:?}: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: url::ParseError,
    },

    /// Only `http` and `https` are fetched. Raised before any I/O.
    #[error("unsupported URL scheme {scheme:?} in {url}")]
    UnsupportedScheme { url: String, scheme: String },

    /// The response body grew past `max_body_bytes`; the transfer was aborted.
    #[error("GET {url}: body exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: u64 },

    /// `force_tls` is set and the target is not `https`.
    #[error("refusing to fetch {url} over plain http (force_tls is set)")]
    InsecureScheme { url: String },

    /// DNS, connect, TLS or timeout failure. Never retried.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Local file could not be resolved or opened.
    #[error("open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O failure while consuming lines.
    #[error("read security.txt: {0}")]
    Read(#[from] io::Error),
}

/// Why a single field value was rejected.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("value does not contain a link")]
    NotALink,

    #[error("value does not look like an email, URL or phone number")]
    InvalidContact,

    #[error("unknown disclosure level {0:?}")]
    UnknownDisclosure(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("URL has no host")]
    MissingHost,

    #[error("link is not served over https")]
    NotHttps,

    #[error("link host {found:?} differs from document host {expected:?}")]
    CrossOrigin {
        expected: String,
        found: Option<String>,
    },

    #[error("bad response status: HTTP {0}")]
    BadStatus(u32),

    #[error("link unreachable: {0}")]
    Unreachable(#[source] Box<Error>),
}
