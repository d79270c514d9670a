//! The parsed document.

use serde::Serialize;
use std::fmt;
use url::Url;

use crate::fields::{Acknowledgements, Contact, Disclosure, Encryption};

/// Fields recognized in one security.txt. Read-only once parsing returns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SecurityTxt {
    pub(crate) contact: Contact,
    pub(crate) acknowledgements: Acknowledgements,
    pub(crate) disclosure: Disclosure,
    pub(crate) encryption: Encryption,
    #[serde(skip)]
    pub(crate) origin: Option<Url>,
}

impl SecurityTxt {
    /// Required by the format, but an absent Contact is not an error here.
    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn acknowledgements(&self) -> &Acknowledgements {
        &self.acknowledgements
    }

    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    pub fn encryption(&self) -> &Encryption {
        &self.encryption
    }

    /// URL the document was fetched from; `None` for local files.
    pub fn origin(&self) -> Option<&Url> {
        self.origin.as_ref()
    }
}

impl fmt::Display for SecurityTxt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Contact: {}", self.contact)?;
        if !self.acknowledgements.is_empty() {
            writeln!(f, "  Acknowledgements: {}", self.acknowledgements)?;
        }
        if !self.disclosure.is_empty() {
            writeln!(f, "  Disclosure: {}", self.disclosure)?;
        }
        if !self.encryption.is_empty() {
            writeln!(f, "  Encryption: {}", self.encryption)?;
        }
        Ok(())
    }
}
