//! Per-field validators and the typed values they produce.
//!
//! Contact and Disclosure checks are pure. Acknowledgements and Encryption
//! checks can, depending on [`ValidationOptions`], compare the link's host
//! with the document origin and issue a live GET to the link. With live
//! validation on, parsing is no longer a local operation: it can fail per
//! field on network errors and costs one request per link.

mod acknowledgements;
mod contact;
mod disclosure;
mod encryption;

use url::Url;

use crate::config::{FetchConfig, ValidationOptions};
use crate::error::FieldError;
use crate::fetch;

pub use acknowledgements::Acknowledgements;
pub use contact::{check_contact, Contact};
pub use disclosure::{check_disclosure, Disclosure};
pub use encryption::Encryption;

/// Validation context for one document.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
    fetch: FetchConfig,
    origin: Option<Url>,
}

impl Validator {
    pub fn new(options: ValidationOptions, fetch: FetchConfig) -> Self {
        Self {
            options,
            fetch,
            origin: None,
        }
    }

    /// Remember where the document was fetched from, for same-origin checks.
    pub fn with_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn origin(&self) -> Option<&Url> {
        self.origin.as_ref()
    }

    pub fn check_contact(&self, val: &str) -> Result<Contact, FieldError> {
        check_contact(val)
    }

    pub fn check_disclosure(&self, val: &str) -> Result<Disclosure, FieldError> {
        check_disclosure(val)
    }

    /// Requires the substring `http`. Same-origin and reachability checks
    /// apply when enabled; in those modes the normalized URL is stored.
    pub fn check_acknowledgements(&self, val: &str) -> Result<Acknowledgements, FieldError> {
        if !val.contains("http") {
            return Err(FieldError::NotALink);
        }
        if !self.options.enforce_same_origin && !self.options.live_validation {
            return Ok(Acknowledgements::new(val));
        }
        let link = Url::parse(val)?;
        self.ensure_same_origin(&link)?;
        self.ensure_reachable(&link)?;
        Ok(Acknowledgements::new(link.as_str()))
    }

    /// Must parse as an absolute URL with a host. Live validation also
    /// requires `https` and a 200 response.
    pub fn check_encryption(&self, val: &str) -> Result<Encryption, FieldError> {
        let link = Url::parse(val)?;
        if link.host_str().is_none() {
            return Err(FieldError::MissingHost);
        }
        if self.options.live_validation && link.scheme() != "https" {
            return Err(FieldError::NotHttps);
        }
        self.ensure_same_origin(&link)?;
        self.ensure_reachable(&link)?;
        Ok(Encryption::new(link))
    }

    /// No-op unless same-origin enforcement is on and the origin is known.
    fn ensure_same_origin(&self, link: &Url) -> Result<(), FieldError> {
        if !self.options.enforce_same_origin {
            return Ok(());
        }
        let Some(expected) = self.origin.as_ref().and_then(Url::host_str) else {
            return Ok(());
        };
        match link.host_str() {
            Some(found) if found.eq_ignore_ascii_case(expected) => Ok(()),
            found => Err(FieldError::CrossOrigin {
                expected: expected.to_string(),
                found: found.map(str::to_string),
            }),
        }
    }

    fn ensure_reachable(&self, link: &Url) -> Result<(), FieldError> {
        if !self.options.live_validation {
            return Ok(());
        }
        let status = fetch::status_of(link, &self.fetch)
            .map_err(|e| FieldError::Unreachable(Box::new(e)))?;
        if status != 200 {
            return Err(FieldError::BadStatus(status));
        }
        Ok(())
    }
}
