//! `Contact:` field.

use serde::Serialize;
use std::fmt;

use crate::error::FieldError;

/// How to reach the security team: an email address, a URL or a phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Contact(String);

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw value.
    pub fn matches(&self, s: &str) -> bool {
        self.0.to_lowercase() == s.to_lowercase()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Loose acceptance: anything email-like, URL-like, or shaped like a phone
/// number (7 or 10 bytes long, or containing a hyphen).
pub fn check_contact(val: &str) -> Result<Contact, FieldError> {
    let looks_valid = val.contains('@')
        || val.contains("http")
        || val.len() == 7
        || val.len() == 10
        || val.contains('-');
    if looks_valid {
        Ok(Contact(val.to_string()))
    } else {
        Err(FieldError::InvalidContact)
    }
}
