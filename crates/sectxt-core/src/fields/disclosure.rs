//! `Disclosure:` field.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::FieldError;

/// Disclosure policy the organization follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Unspecified,
    None,
    Partial,
    Full,
}

impl Disclosure {
    pub fn is_empty(&self) -> bool {
        *self == Disclosure::Unspecified
    }

    /// Normalized lower-case form; empty when unspecified.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disclosure::Unspecified => "",
            Disclosure::None => "none",
            Disclosure::Partial => "partial",
            Disclosure::Full => "full",
        }
    }

    pub fn matches(&self, s: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(s)
    }
}

impl fmt::Display for Disclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Disclosure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Accepts `none`, `partial` or `full` in any case.
pub fn check_disclosure(val: &str) -> Result<Disclosure, FieldError> {
    match val.to_ascii_lowercase().as_str() {
        "none" => Ok(Disclosure::None),
        "partial" => Ok(Disclosure::Partial),
        "full" => Ok(Disclosure::Full),
        _ => Err(FieldError::UnknownDisclosure(val.to_string())),
    }
}
