//! `Acknowledgements:` field.

use serde::Serialize;
use std::fmt;

/// Link to the page thanking reporters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Acknowledgements(String);

impl Acknowledgements {
    pub(crate) fn new(val: &str) -> Self {
        Acknowledgements(val.to_string())
    }

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

impl fmt::Display for Acknowledgements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
