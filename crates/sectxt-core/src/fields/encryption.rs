//! `Encryption:` field, a link to the team's public key.

use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

/// URL-shaped value. Empty means no host.
///
/// Equality compares host and path only. Scheme, query and fragment are
/// ignored, so `http://` and `https://` links to the same key are equal.
#[derive(Debug, Clone, Default)]
pub struct Encryption(Option<Url>);

impl Encryption {
    pub(crate) fn new(url: Url) -> Self {
        Encryption(Some(url))
    }

    pub fn host(&self) -> Option<&str> {
        self.0.as_ref().and_then(Url::host_str)
    }

    pub fn path(&self) -> &str {
        self.0.as_ref().map(Url::path).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.host().is_none()
    }

    pub fn equals_ignoring_scheme_and_query(&self, other: &Encryption) -> bool {
        self.host() == other.host() && self.path() == other.path()
    }

    /// Compares against a raw URL string; unparseable input never matches.
    pub fn matches(&self, s: &str) -> bool {
        match Url::parse(s) {
            Ok(u) => self.equals_ignoring_scheme_and_query(&Encryption(Some(u))),
            Err(_) => false,
        }
    }
}

impl PartialEq for Encryption {
    fn eq(&self, other: &Self) -> bool {
        self.equals_ignoring_scheme_and_query(other)
    }
}

impl PartialEq<str> for Encryption {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for Encryption {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(u) => write!(f, "{}", u),
            None => Ok(()),
        }
    }
}

impl Serialize for Encryption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
